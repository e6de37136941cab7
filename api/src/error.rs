use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Timeouts and connect errors are reported to the user the same way:
    /// the backend could not be reached.
    pub fn is_connection_failure(&self) -> bool {
        match self {
            ApiError::Http(e) => e.is_timeout() || e.is_connect(),
        }
    }
}
