use tracing::info;

use api::ApiClient;
use api::types::NewUser;
use session::kv::KvStore;
use session::model::Session;
use session::store::SessionStore;

use super::{FlowError, invalid_if_any};
use crate::validate::{check_email, check_password, check_required};

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FlowError> {
        let errors = [
            check_required("username", &self.username),
            check_email(&self.email),
            check_password("password", &self.password),
        ];
        invalid_if_any(errors.into_iter().flatten().collect())
    }
}

/// Create the account and log the new user straight in; the created record
/// returned by the backend is consumed as the login payload.
pub async fn run<S: KvStore>(
    api: &ApiClient,
    sessions: &SessionStore<S>,
    form: &SignupForm,
) -> Result<Session, FlowError> {
    form.validate()?;

    let created = api
        .create_user(&NewUser {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
        })
        .await?;

    let new_session = Session::new(created.id.to_string(), created.username.clone());
    sessions.login(new_session.clone()).await;

    info!(user_id = created.id, "account created");
    Ok(new_session)
}
