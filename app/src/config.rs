use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the REST backend exposing /users and /employees.
    pub api_base_url: String,

    /// Per-request HTTP timeout in milliseconds. A request that does not
    /// complete within it is reported as a connection failure.
    pub http_timeout_ms: u64,

    /// SQLite connection string for the persisted session record.
    pub session_db_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("ROSTER_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let http_timeout_ms = std::env::var("ROSTER_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let session_db_url = std::env::var("ROSTER_SESSION_DB")
            .unwrap_or_else(|_| "sqlite://roster_session.db?mode=rwc".to_string());

        Self {
            api_base_url,
            http_timeout_ms,
            session_db_url,
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }
}
