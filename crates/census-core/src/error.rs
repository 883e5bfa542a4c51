use thiserror::Error;

/// Core error type shared across census crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The composition policy label is not recognised.
    #[error("invalid composition policy: {0}")]
    InvalidPolicy(String),
    /// The output format label is not recognised.
    #[error("invalid output format: {0}")]
    InvalidFormat(String),
}

/// Convenience alias for results returned by census crates.
pub type Result<T> = std::result::Result<T, Error>;
