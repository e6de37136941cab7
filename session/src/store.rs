use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::kv::{KvStore, USER_ID_KEY, USER_NAME_KEY};
use crate::model::Session;
use crate::reducer::{Action, AuthState, reduce};

/// Whether the startup restore has resolved. Consumers must not make a
/// routing decision while the store is still `Initializing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Ready,
}

/// Point-in-time view of the store, safe to hand to consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: Phase,
    pub session: Option<Session>,
}

struct Inner {
    phase: Phase,
    state: AuthState,
}

/// Single source of truth for the current session.
///
/// Bridges the pure reducer and the durable adapter: `login`/`logout` apply
/// the in-memory transition first and persist afterwards, so a caller
/// re-reading state immediately after the call already observes the new
/// session even while the write is in flight. Persistence failures are
/// logged and never rolled back into memory; the durable copy re-converges
/// on the next successful write or the next restart.
pub struct SessionStore<S: KvStore> {
    inner: Mutex<Inner>,
    kv: Arc<S>,
}

impl<S: KvStore> SessionStore<S> {
    pub fn new(kv: Arc<S>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                phase: Phase::Initializing,
                state: AuthState::default(),
            }),
            kv,
        }
    }

    /// Restore a persisted session, if any, and mark the store ready.
    ///
    /// Runs once per store; later calls are no-ops. A session is restored
    /// only when both keys are present and non-empty. Read failures degrade
    /// to the anonymous state, which is always the safe default.
    pub async fn initialize(&self) {
        {
            let inner = self.inner.lock().await;
            if inner.phase == Phase::Ready {
                return;
            }
        }

        let restored = self.read_persisted().await;

        let mut inner = self.inner.lock().await;
        // An explicit login/logout may have resolved the store while the
        // reads were in flight; the stale restore must not clobber it.
        if inner.phase == Phase::Ready {
            return;
        }

        if let Some(session) = restored {
            debug!(user_id = %session.id, "restored persisted session");
            inner.state = reduce(std::mem::take(&mut inner.state), Action::Login(session));
        }
        inner.phase = Phase::Ready;
    }

    async fn read_persisted(&self) -> Option<Session> {
        let user_id = match self.kv.get(USER_ID_KEY).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "failed to read persisted session");
                return None;
            }
        };
        let user_name = match self.kv.get(USER_NAME_KEY).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "failed to read persisted session");
                return None;
            }
        };

        match (user_id, user_name) {
            (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => {
                Some(Session::new(id, name))
            }
            _ => None,
        }
    }

    /// Log the user in: memory first, durable store after. Re-entrant login
    /// replaces the held session.
    pub async fn login(&self, session: Session) {
        {
            let mut inner = self.inner.lock().await;
            inner.state = reduce(
                std::mem::take(&mut inner.state),
                Action::Login(session.clone()),
            );
            inner.phase = Phase::Ready;
        }

        let entries = [
            (USER_ID_KEY, session.id.as_str()),
            (USER_NAME_KEY, session.display_name.as_str()),
        ];
        if let Err(e) = self.kv.set_many(&entries).await {
            warn!(error = %e, "failed to persist session");
        }
    }

    /// Log the user out. Idempotent: from the anonymous state this changes
    /// nothing in memory and the key removal below is a no-op.
    pub async fn logout(&self) {
        {
            let mut inner = self.inner.lock().await;
            inner.state = reduce(std::mem::take(&mut inner.state), Action::Logout);
            inner.phase = Phase::Ready;
        }

        if let Err(e) = self.kv.remove_many(&[USER_ID_KEY, USER_NAME_KEY]).await {
            warn!(error = %e, "failed to clear persisted session");
        }
    }

    pub async fn current(&self) -> Option<Session> {
        self.inner.lock().await.state.session.clone()
    }

    pub async fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock().await;
        Snapshot {
            phase: inner.phase,
            session: inner.state.session.clone(),
        }
    }
}
