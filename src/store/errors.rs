//! Document store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Filename was empty after trimming
    #[error("filename cannot be empty")]
    EmptyName,

    /// A document with this name already exists
    #[error("file '{0}' already exists")]
    AlreadyExists(String),

    /// No document with this name
    #[error("file '{0}' does not exist")]
    NotFound(String),
}
