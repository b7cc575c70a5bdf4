use thiserror::Error;

/// Error type that captures common bill-tracking failures.
#[derive(Debug, Error)]
pub enum BillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Bill not found: {0}")]
    BillNotFound(i64),
    #[error("Notification failed: {0}")]
    Notify(String),
}

pub type Result<T> = std::result::Result<T, BillError>;
