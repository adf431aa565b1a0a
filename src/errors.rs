use thiserror::Error;

/// Error type for input validation, persistence, and transaction failures.
///
/// None of these are retried internally; callers decide on retry policy.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("persistence failure: {0}")]
    Persistence(String),
    #[error("reclassification aborted, no changes applied: {0}")]
    Transaction(String),
}

impl TrackerError {
    pub fn validation(message: impl Into<String>) -> Self {
        TrackerError::Validation(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        TrackerError::Persistence(message.into())
    }
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        TrackerError::Persistence(err.to_string())
    }
}
