use tokio::test;

use session::kv::KvStore;
use session::kv::sqlite_kv::SqliteKvStore;

async fn memory_store() -> SqliteKvStore {
    SqliteKvStore::new("sqlite::memory:")
        .await
        .expect("in-memory sqlite")
}

#[test]
async fn get_missing_key_returns_none() -> anyhow::Result<()> {
    let kv = memory_store().await;
    assert_eq!(kv.get("userId").await?, None);
    Ok(())
}

#[test]
async fn set_then_get_round_trips() -> anyhow::Result<()> {
    let kv = memory_store().await;

    kv.set("userId", "7").await?;
    assert_eq!(kv.get("userId").await?.as_deref(), Some("7"));

    // Upsert: a second set overwrites.
    kv.set("userId", "8").await?;
    assert_eq!(kv.get("userId").await?.as_deref(), Some("8"));

    Ok(())
}

#[test]
async fn remove_deletes_and_tolerates_absent_keys() -> anyhow::Result<()> {
    let kv = memory_store().await;

    kv.set("userName", "rehan").await?;
    kv.remove("userName").await?;
    assert_eq!(kv.get("userName").await?, None);

    // Removing a key that was never written is a no-op, not an error.
    kv.remove("userName").await?;

    Ok(())
}

#[test]
async fn set_many_writes_all_entries() -> anyhow::Result<()> {
    let kv = memory_store().await;

    kv.set_many(&[("userId", "7"), ("userName", "rehan")]).await?;

    assert_eq!(kv.get("userId").await?.as_deref(), Some("7"));
    assert_eq!(kv.get("userName").await?.as_deref(), Some("rehan"));

    Ok(())
}

#[test]
async fn set_many_overwrites_existing_entries() -> anyhow::Result<()> {
    let kv = memory_store().await;

    kv.set("userId", "1").await?;
    kv.set_many(&[("userId", "2"), ("userName", "bob")]).await?;

    assert_eq!(kv.get("userId").await?.as_deref(), Some("2"));
    assert_eq!(kv.get("userName").await?.as_deref(), Some("bob"));

    Ok(())
}

#[test]
async fn remove_many_clears_the_record_as_a_pair() -> anyhow::Result<()> {
    let kv = memory_store().await;

    kv.set_many(&[("userId", "7"), ("userName", "rehan")]).await?;
    kv.remove_many(&["userId", "userName"]).await?;

    assert_eq!(kv.get("userId").await?, None);
    assert_eq!(kv.get("userName").await?, None);

    // And again over an already-empty store.
    kv.remove_many(&["userId", "userName"]).await?;

    Ok(())
}
