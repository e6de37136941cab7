use crate::model::Session;

/// Session transitions. `Login` while already authenticated simply replaces
/// the held session; no logout is required first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login(Session),
    Logout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Pure state transition: no I/O, no failure modes. Total over `Action`
/// by construction.
pub fn reduce(mut state: AuthState, action: Action) -> AuthState {
    match action {
        Action::Login(session) => state.session = Some(session),
        Action::Logout => state.session = None,
    }
    state
}
