use thiserror::Error;

/// Errors emitted while writing report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for reporting operations.
pub type ReportResult<T> = std::result::Result<T, ReportError>;
