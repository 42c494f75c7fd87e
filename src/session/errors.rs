//! Session error types
//!
//! Every operation-level failure (validation, policy denial, persistence) is
//! recovered inside the session loop and surfaced as a pending message.
//! Only console I/O failure escapes the loop.

use std::io;

use thiserror::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Fatal session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// The console went away (e.g. EOF on stdin)
    #[error("console i/o failure: {0}")]
    Console(#[from] io::Error),
}
