//! Persistence codec error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Persistence failures at the file boundary.
///
/// Malformed individual records are not represented here: the loader
/// recovers from them locally (see [`MalformedRecord`]).
#[derive(Debug, Error)]
pub enum CodecError {
    /// The store file could not be read
    #[error("failed to read store file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store file could not be written
    #[error("failed to write store file {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single persisted line that could not be parsed.
///
/// Recovered locally by skipping the line; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    /// Fewer than four colon-delimited fields
    #[error("fewer than 4 fields")]
    MissingFields,

    /// Classification field is not an integer in range
    #[error("invalid classification '{0}'")]
    BadClassification(String),

    /// Filename field is empty after trimming
    #[error("empty filename")]
    EmptyFilename,
}
