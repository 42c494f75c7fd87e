//! Interactive user registration
//!
//! Collects username, password (with confirmation), and clearance over the
//! console boundary, then appends the new records to both registries.
//! Registration lives outside the session: it is a separate CLI subcommand
//! and never runs while a session is active.

use super::crypto::{generate_salt, hash_password, PasswordPolicy};
use super::errors::{AuthError, AuthResult};
use super::registry::CredentialRegistry;
use crate::cli::console::Console;
use crate::observability::Logger;
use crate::policy::Level;

/// Run the interactive registration flow.
pub fn register_user<C: Console>(
    console: &mut C,
    registry: &CredentialRegistry,
    policy: &PasswordPolicy,
) -> AuthResult<()> {
    console.write("Username: ")?;
    let username = console.read_line()?.trim().to_string();
    validate_username(&username)?;

    if registry.user_exists(&username)? {
        return Err(AuthError::UserExists);
    }

    console.write("Password: ")?;
    let password = console.read_line()?.trim().to_string();

    console.write("Confirm Password: ")?;
    let confirmation = console.read_line()?.trim().to_string();

    if password != confirmation {
        return Err(AuthError::PasswordMismatch);
    }
    policy.validate(&password)?;

    console.write("User clearance (0, 1, 2, 3): ")?;
    let clearance: Level = console
        .read_line()?
        .parse()
        .map_err(|_| AuthError::InvalidClearance)?;

    let salt = generate_salt();
    let hash = hash_password(&password, &salt);
    registry.append(&username, &salt, &hash, clearance)?;

    Logger::info(
        "USER_REGISTERED",
        &[
            ("user", username.as_str()),
            ("clearance", &clearance.to_string()),
        ],
    );
    console.write_line("User created successfully!")?;
    Ok(())
}

/// The registry lines are colon-separated, so the username must be
/// non-empty and colon-free.
fn validate_username(username: &str) -> AuthResult<()> {
    if username.is_empty() {
        return Err(AuthError::InvalidUsername(
            "username cannot be empty".to_string(),
        ));
    }
    if username.contains(':') {
        return Err(AuthError::InvalidUsername(
            "username cannot contain ':'".to_string(),
        ));
    }
    Ok(())
}
