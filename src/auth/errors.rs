//! Credential subsystem error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication and registration errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user or wrong password (generic - don't leak which)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Username already present in the registries
    #[error("username already exists")]
    UserExists,

    /// Username is empty or would break the registry line format
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Password and confirmation differ
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Password does not meet requirements
    #[error("password does not meet requirements: {0}")]
    WeakPassword(String),

    /// Clearance outside 0..=3 or not a number
    #[error("invalid clearance level")]
    InvalidClearance,

    /// A registry file could not be read or written.
    ///
    /// Distinct from `InvalidCredentials`: this is a provider failure, not a
    /// rejected login. Both return the operator to the login prompt.
    #[error("credential registry {}: {source}", .path.display())]
    Registry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Console I/O failure during interactive registration
    #[error("console i/o failure: {0}")]
    Console(#[from] io::Error),
}

impl AuthError {
    /// Registry access failure for `path`.
    pub fn registry(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AuthError::Registry {
            path: path.into(),
            source,
        }
    }
}
