//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur while persisting or restoring registry state.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot is not valid JSON or does not match the row schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Snapshot format version is not supported.
    #[error("unsupported snapshot format {0}")]
    UnsupportedFormat(u32),
    /// Snapshot rows violate a registry invariant.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}
