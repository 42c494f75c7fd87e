//! # Mandatory Access Control Policy
//!
//! Bell-LaPadula decision functions over security levels.
//!
//! ## Invariants
//! - No read up: a subject never reads a document classified above its
//!   clearance.
//! - No write down: a subject never writes to a document classified below its
//!   clearance.
//! - Denial is reported, never silently ignored.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Highest valid security level.
pub const MAX_LEVEL: u8 = 3;

/// A security level in `0..=3`.
///
/// Used both for a subject's clearance (fixed at login) and a document's
/// classification (fixed at creation). Construction validates the range;
/// out-of-range values are rejected, never clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Lowest level (unclassified).
    pub const MIN: Level = Level(0);

    /// Highest level.
    pub const MAX: Level = Level(MAX_LEVEL);

    /// Create a level, rejecting values above [`MAX_LEVEL`].
    pub fn new(raw: u8) -> Result<Self, LevelError> {
        if raw > MAX_LEVEL {
            return Err(LevelError::OutOfRange(i64::from(raw)));
        }
        Ok(Level(raw))
    }

    /// The raw integer value.
    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// All levels in ascending order, for exhaustive checks.
    pub fn all() -> impl Iterator<Item = Level> {
        (0..=MAX_LEVEL).map(Level)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Level {
    type Err = LevelError;

    /// Parse a level from its decimal form. Signed input is accepted so that
    /// `-1` reports out-of-range rather than not-a-number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| LevelError::NotANumber(s.to_string()))?;
        if !(0..=i64::from(MAX_LEVEL)).contains(&raw) {
            return Err(LevelError::OutOfRange(raw));
        }
        Ok(Level(raw as u8))
    }
}

/// Invalid security level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// Value outside `0..=3`.
    #[error("security level {0} is outside 0..=3")]
    OutOfRange(i64),

    /// Value is not an integer.
    #[error("security level '{0}' is not a number")]
    NotANumber(String),
}

/// Access denied by a Bell-LaPadula predicate.
///
/// Carries which predicate failed and the two levels compared, so the denial
/// can be surfaced with full context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// No read up: the document is classified above the reader's clearance.
    #[error("read denied: classification {classification} exceeds clearance {clearance}")]
    ReadUp {
        clearance: Level,
        classification: Level,
    },

    /// No write down: the document is classified below the writer's clearance.
    #[error("write denied: classification {classification} is below clearance {clearance}")]
    WriteDown {
        clearance: Level,
        classification: Level,
    },
}

/// No read up: reading is allowed iff `classification <= clearance`.
pub fn can_read(clearance: Level, classification: Level) -> bool {
    classification <= clearance
}

/// No write down: writing is allowed iff `classification >= clearance`.
///
/// Shared by append and overwrite; a high-clearance subject must not
/// contaminate a lower-classified document.
pub fn can_write(clearance: Level, classification: Level) -> bool {
    classification >= clearance
}

/// Checked form of [`can_read`].
pub fn check_read(clearance: Level, classification: Level) -> Result<(), AccessDenied> {
    if can_read(clearance, classification) {
        Ok(())
    } else {
        Err(AccessDenied::ReadUp {
            clearance,
            classification,
        })
    }
}

/// Checked form of [`can_write`].
pub fn check_write(clearance: Level, classification: Level) -> Result<(), AccessDenied> {
    if can_write(clearance, classification) {
        Ok(())
    } else {
        Err(AccessDenied::WriteDown {
            clearance,
            classification,
        })
    }
}
