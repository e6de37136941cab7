use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub const MIN_PASSWORD_LEN: usize = 6;

/// Per-field validation failures, worded exactly as shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("please enter a valid email")]
    InvalidEmail,

    #[error("{0} must have at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort(&'static str),

    #[error("both new password and confirm new password should match")]
    PasswordMismatch,
}

pub fn check_required(field: &'static str, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::Required(field))
    } else {
        None
    }
}

pub fn check_email(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        Some(FieldError::Required("email"))
    } else if !EMAIL_RE.is_match(email) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

pub fn check_password(field: &'static str, password: &str) -> Option<FieldError> {
    if password.trim().is_empty() {
        Some(FieldError::Required(field))
    } else if password.trim().len() < MIN_PASSWORD_LEN {
        Some(FieldError::PasswordTooShort(field))
    } else {
        None
    }
}
