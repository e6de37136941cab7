pub mod sqlite_kv;

/// Key the session store persists the user id under.
pub const USER_ID_KEY: &str = "userId";
/// Key the session store persists the display name under.
pub const USER_NAME_KEY: &str = "userName";

/// Asynchronous durable string-keyed storage. Implementations must treat
/// removal of an absent key as a no-op, and must apply the `_many` variants
/// atomically so a multi-key record can never be observed half-written.
#[async_trait::async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
    async fn set_many(&self, entries: &[(&str, &str)]) -> anyhow::Result<()>;
    async fn remove_many(&self, keys: &[&str]) -> anyhow::Result<()>;
}
