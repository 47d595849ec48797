//! Shared error types for the preference layer

use thiserror::Error;

/// Errors produced by a persisted preference store
///
/// These never reach UI consumers: the preference service treats a failed
/// read as an absent value and keeps its in-memory state when a write fails.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage could not be read or written
    #[error("preference store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Stored contents did not parse as a preference document
    #[error("preference store contents malformed: {0}")]
    Malformed(String),
}
