use tracing::info;

use api::ApiClient;

use super::{FlowError, invalid_if_any};
use crate::validate::{FieldError, check_email, check_password};

#[derive(Debug, Clone, Default)]
pub struct PasswordUpdateForm {
    pub email: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

impl PasswordUpdateForm {
    pub fn validate(&self) -> Result<(), FlowError> {
        let mut errors: Vec<FieldError> = [
            check_email(&self.email),
            check_password("new password", &self.new_password),
            check_password("confirm new password", &self.confirm_new_password),
        ]
        .into_iter()
        .flatten()
        .collect();

        // Only compare once both fields individually pass.
        if errors.is_empty() && self.new_password != self.confirm_new_password {
            errors.push(FieldError::PasswordMismatch);
        }

        invalid_if_any(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordUpdateOutcome {
    Updated,
    EmailNotFound,
}

/// Look the user up by email and replace the stored record with the new
/// password. An unknown email is a normal negative outcome.
pub async fn run(
    api: &ApiClient,
    form: &PasswordUpdateForm,
) -> Result<PasswordUpdateOutcome, FlowError> {
    form.validate()?;

    let users = api.list_users().await?;

    let Some(user) = users.iter().find(|u| u.email == form.email) else {
        return Ok(PasswordUpdateOutcome::EmailNotFound);
    };

    let mut updated = user.clone();
    updated.password = form.new_password.clone();
    api.update_user(user.id, &updated).await?;

    info!(user_id = user.id, "password updated");
    Ok(PasswordUpdateOutcome::Updated)
}
