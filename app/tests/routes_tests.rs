use std::sync::Arc;

use app::routes::{Route, current_route, route_for};
use session::kv::KvStore;
use session::model::Session;
use session::store::{Phase, SessionStore, Snapshot};

use mock_store::InMemoryKvStore;

#[test]
fn projection_covers_all_snapshot_shapes() {
    let loading = Snapshot {
        phase: Phase::Initializing,
        session: None,
    };
    assert_eq!(route_for(&loading), Route::Loading);

    let anonymous = Snapshot {
        phase: Phase::Ready,
        session: None,
    };
    assert_eq!(route_for(&anonymous), Route::Unauthenticated);

    let authenticated = Snapshot {
        phase: Phase::Ready,
        session: Some(Session::new("1", "alice")),
    };
    assert_eq!(route_for(&authenticated), Route::Authenticated);
}

#[tokio::test]
async fn no_routing_decision_before_initialize_resolves() {
    let sessions = SessionStore::new(Arc::new(InMemoryKvStore::default()));
    assert_eq!(current_route(&sessions).await, Route::Loading);
}

#[tokio::test]
async fn empty_store_routes_unauthenticated() {
    let sessions = SessionStore::new(Arc::new(InMemoryKvStore::default()));
    sessions.initialize().await;
    assert_eq!(current_route(&sessions).await, Route::Unauthenticated);
}

#[tokio::test]
async fn restored_session_routes_authenticated() {
    let kv = Arc::new(InMemoryKvStore::default());
    kv.set("userId", "7").await.unwrap();
    kv.set("userName", "rehan").await.unwrap();

    let sessions = SessionStore::new(kv);
    sessions.initialize().await;

    assert_eq!(current_route(&sessions).await, Route::Authenticated);
}

#[tokio::test]
async fn logout_flips_route_back() {
    let sessions = SessionStore::new(Arc::new(InMemoryKvStore::default()));
    sessions.initialize().await;

    sessions.login(Session::new("1", "alice")).await;
    assert_eq!(current_route(&sessions).await, Route::Authenticated);

    sessions.logout().await;
    assert_eq!(current_route(&sessions).await, Route::Unauthenticated);
}
