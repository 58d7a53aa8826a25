//! Error types for the persistence layer.

use thiserror::Error;

/// Errors produced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem I/O failure.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The on-disk document could not be (de)serialized.
    #[error("store document error: {0}")]
    Document(#[from] serde_json::Error),

    /// An account with this email already exists.
    #[error("an account with this email already exists")]
    DuplicateEmail,
}
