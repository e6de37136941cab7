use tracing::info;

use api::ApiClient;
use session::kv::KvStore;
use session::model::Session;
use session::store::SessionStore;

use super::{FlowError, invalid_if_any};
use crate::validate::{check_email, check_password};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FlowError> {
        let errors = [
            check_email(&self.email),
            check_password("password", &self.password),
        ];
        invalid_if_any(errors.into_iter().flatten().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(Session),
    InvalidCredentials,
}

/// Validate the form, check the credentials against the backend's user list
/// and, on a match, transition the session store.
///
/// The backend exposes no verify endpoint, so the check fetches `/users` and
/// searches for an exact email/password pair. A mismatch changes no state
/// and issues no persistence call.
pub async fn run<S: KvStore>(
    api: &ApiClient,
    sessions: &SessionStore<S>,
    form: &LoginForm,
) -> Result<LoginOutcome, FlowError> {
    form.validate()?;

    let users = api.list_users().await?;

    let matched = users
        .iter()
        .find(|u| u.email == form.email && u.password == form.password);

    match matched {
        Some(user) => {
            // Canonical session shape is fixed here, at the boundary where
            // the backend record is received; the password stays behind.
            let new_session = Session::new(user.id.to_string(), user.username.clone());
            sessions.login(new_session.clone()).await;

            info!(user_id = user.id, "login successful");
            Ok(LoginOutcome::LoggedIn(new_session))
        }
        None => Ok(LoginOutcome::InvalidCredentials),
    }
}
