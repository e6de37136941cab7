use session::kv::KvStore;
use session::store::{Phase, SessionStore, Snapshot};

/// Which of the two command graphs the user is presented with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Startup restore has not resolved; no routing decision yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Pure projection from a session snapshot to a navigation choice. Holds no
/// state of its own, so it can never route on stale data.
pub fn route_for(snapshot: &Snapshot) -> Route {
    match snapshot.phase {
        Phase::Initializing => Route::Loading,
        Phase::Ready => {
            if snapshot.session.is_some() {
                Route::Authenticated
            } else {
                Route::Unauthenticated
            }
        }
    }
}

pub async fn current_route<S: KvStore>(sessions: &SessionStore<S>) -> Route {
    route_for(&sessions.snapshot().await)
}
