//! Credential provider
//!
//! The session authenticates through this trait only; it never sees the
//! registries or the hashing scheme.

use super::crypto::verify_password;
use super::errors::{AuthError, AuthResult};
use super::registry::CredentialRegistry;
use crate::policy::Level;

/// Verifies a username/password pair and yields the user's clearance.
///
/// `Err(InvalidCredentials)` is a rejected login; `Err(Registry { .. })` is
/// a provider failure. The session treats both as authentication failures
/// and returns the operator to the login prompt.
pub trait CredentialProvider {
    fn authenticate(&self, username: &str, password: &str) -> AuthResult<Level>;
}

/// Provider backed by the salt/shadow registries.
#[derive(Debug, Clone)]
pub struct RegistryCredentialProvider {
    registry: CredentialRegistry,
}

impl RegistryCredentialProvider {
    pub fn new(registry: CredentialRegistry) -> Self {
        Self { registry }
    }
}

impl CredentialProvider for RegistryCredentialProvider {
    fn authenticate(&self, username: &str, password: &str) -> AuthResult<Level> {
        let record = self
            .registry
            .lookup(username)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &record.salt, &record.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(record.clearance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::crypto::{generate_salt, hash_password};

    fn provider_with_user(
        dir: &tempfile::TempDir,
        username: &str,
        password: &str,
        clearance: Level,
    ) -> RegistryCredentialProvider {
        let registry =
            CredentialRegistry::new(dir.path().join("salt.txt"), dir.path().join("shadow.txt"));
        let salt = generate_salt();
        let hash = hash_password(password, &salt);
        registry.append(username, &salt, &hash, clearance).unwrap();
        RegistryCredentialProvider::new(registry)
    }

    #[test]
    fn test_authenticate_known_user() {
        let dir = tempfile::tempdir().unwrap();
        let clearance = Level::new(2).unwrap();
        let provider = provider_with_user(&dir, "alice", "correct horse", clearance);

        assert_eq!(
            provider.authenticate("alice", "correct horse").unwrap(),
            clearance
        );
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let dir = tempfile::tempdir().unwrap();
        let provider = provider_with_user(&dir, "alice", "correct horse", Level::MIN);

        assert!(matches!(
            provider.authenticate("alice", "battery staple").unwrap_err(),
            AuthError::InvalidCredentials
        ));
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let dir = tempfile::tempdir().unwrap();
        let provider = provider_with_user(&dir, "alice", "correct horse", Level::MIN);

        assert!(matches!(
            provider.authenticate("mallory", "anything").unwrap_err(),
            AuthError::InvalidCredentials
        ));
    }
}
