use thiserror::Error;

/// Core error type shared across Gamesmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog violates internal invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    /// The factory configuration is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias for results returned by Gamesmith crates.
pub type Result<T> = std::result::Result<T, Error>;
