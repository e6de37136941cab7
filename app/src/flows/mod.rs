pub mod employees;
pub mod login;
pub mod password;
pub mod signup;

use thiserror::Error;

use crate::validate::FieldError;

/// Failure modes shared by every workflow. Negative results such as a
/// credential mismatch or an unknown email are outcomes, not errors; they
/// never appear here.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("{}", join_field_errors(.0))]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Api(#[from] api::ApiError),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn invalid_if_any(errors: Vec<FieldError>) -> Result<(), FlowError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(FlowError::Invalid(errors))
    }
}
