//! Credential registries
//!
//! Two append-only, newline-delimited, colon-separated files:
//!
//! ```text
//! salt registry:   <username>:<salt>
//! shadow registry: <username>:<hash>:<clearance>
//! ```
//!
//! A missing file means no users have been registered yet, not an error.
//! Malformed lines are skipped on lookup. The first record for a username
//! wins, matching append-only semantics where registration rejects
//! duplicates up front.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::errors::{AuthError, AuthResult};
use crate::policy::Level;

/// A user's stored credential material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub salt: String,
    pub password_hash: String,
    pub clearance: Level,
}

/// Handle on the salt and shadow registry files.
#[derive(Debug, Clone)]
pub struct CredentialRegistry {
    salt_path: PathBuf,
    shadow_path: PathBuf,
}

impl CredentialRegistry {
    pub fn new(salt_path: impl Into<PathBuf>, shadow_path: impl Into<PathBuf>) -> Self {
        Self {
            salt_path: salt_path.into(),
            shadow_path: shadow_path.into(),
        }
    }

    /// Whether a username already has a salt record.
    pub fn user_exists(&self, username: &str) -> AuthResult<bool> {
        Ok(self.find_salt(username)?.is_some())
    }

    /// Look up a user's salt, hash, and clearance.
    ///
    /// Returns `Ok(None)` for an unknown user, or one whose records are
    /// incomplete or malformed.
    pub fn lookup(&self, username: &str) -> AuthResult<Option<CredentialRecord>> {
        let Some(salt) = self.find_salt(username)? else {
            return Ok(None);
        };

        let contents = match read_registry(&self.shadow_path)? {
            Some(contents) => contents,
            None => return Ok(None),
        };

        for line in contents.lines() {
            let mut parts = line.splitn(3, ':');
            if parts.next() != Some(username) {
                continue;
            }
            let (Some(hash), Some(clearance)) = (parts.next(), parts.next()) else {
                continue;
            };
            let Ok(clearance) = clearance.parse::<Level>() else {
                continue;
            };
            return Ok(Some(CredentialRecord {
                salt,
                password_hash: hash.to_string(),
                clearance,
            }));
        }
        Ok(None)
    }

    /// Append a new user's records to both registries.
    pub fn append(
        &self,
        username: &str,
        salt: &str,
        password_hash: &str,
        clearance: Level,
    ) -> AuthResult<()> {
        append_line(&self.salt_path, &format!("{}:{}", username, salt))?;
        append_line(
            &self.shadow_path,
            &format!("{}:{}:{}", username, password_hash, clearance),
        )
    }

    fn find_salt(&self, username: &str) -> AuthResult<Option<String>> {
        let contents = match read_registry(&self.salt_path)? {
            Some(contents) => contents,
            None => return Ok(None),
        };
        for line in contents.lines() {
            let mut parts = line.splitn(2, ':');
            if parts.next() == Some(username) {
                if let Some(salt) = parts.next() {
                    return Ok(Some(salt.to_string()));
                }
            }
        }
        Ok(None)
    }
}

fn read_registry(path: &Path) -> AuthResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        // No registrations yet
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AuthError::registry(path, e)),
    }
}

fn append_line(path: &Path, line: &str) -> AuthResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AuthError::registry(path, e))?;
    writeln!(file, "{}", line).map_err(|e| AuthError::registry(path, e))
}
