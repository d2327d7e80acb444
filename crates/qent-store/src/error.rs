//! Error handling for the store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A result referenced a circuit that does not exist.
    #[error("Foreign key violation: circuit {circuit_id} does not exist")]
    ForeignKeyViolation { circuit_id: i64 },

    /// A result's outcome disagrees with its shot count.
    #[error("Invalid result: {0}")]
    InvalidResult(String),

    /// SQLite database error.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// IO error while preparing the database location.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}
