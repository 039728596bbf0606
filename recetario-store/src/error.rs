//! Error types for the key-value substrate.

use thiserror::Error;

/// Result type for substrate operations.
pub type KvResult<T> = Result<T, KvError>;

/// Errors that can occur when reading or writing the substrate.
#[derive(Debug, Error)]
pub enum KvError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The substrate refused the operation (quota exceeded, disabled
    /// storage, and similar conditions).
    #[error("substrate unavailable: {0}")]
    Unavailable(String),
}
