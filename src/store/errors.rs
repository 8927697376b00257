//! # Store Errors
//!
//! Failures of the persistence layer. None of these occur under normal
//! operation; the HTTP layer reports them as server faults.

use std::io;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the data file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data file could not be encoded or decoded
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A thread panicked while holding the table lock
    #[error("Storage lock poisoned")]
    LockPoisoned,

    /// Every id up to `i64::MAX` has been handed out
    #[error("No unused record id left")]
    IdsExhausted,
}
