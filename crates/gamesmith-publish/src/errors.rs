use thiserror::Error;

/// Errors emitted while writing unit artifacts.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for publishing operations.
pub type PublishResult<T> = std::result::Result<T, PublishError>;
