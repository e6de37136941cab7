use serde::{Deserialize, Serialize};

/// The currently authenticated identity.
///
/// A session is either wholly present or wholly absent: every consumer sees
/// `Option<Session>`, never a half-populated record. The shape is fixed at
/// the boundary where a backend user record is exchanged for a session, and
/// deliberately carries no credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque backend identifier, kept as a string.
    pub id: String,
    pub display_name: String,
}

impl Session {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}
