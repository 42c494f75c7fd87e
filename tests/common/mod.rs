//! Shared helpers for integration tests
#![allow(dead_code)]

use std::path::Path;

use latticefs::auth::crypto::{generate_salt, hash_password};
use latticefs::auth::{CredentialRegistry, RegistryCredentialProvider};
use latticefs::cli::ScriptedConsole;
use latticefs::policy::Level;
use latticefs::session::Session;
use latticefs::store::DocumentStore;

/// Registry over `salt.txt`/`shadow.txt` inside `dir`.
pub fn registry_in(dir: &Path) -> CredentialRegistry {
    CredentialRegistry::new(dir.join("salt.txt"), dir.join("shadow.txt"))
}

/// Register a user directly against the registry files.
pub fn add_user(registry: &CredentialRegistry, username: &str, password: &str, clearance: u8) {
    let salt = generate_salt();
    let hash = hash_password(password, &salt);
    registry
        .append(username, &salt, &hash, Level::new(clearance).unwrap())
        .unwrap();
}

/// Drive one full session over a scripted console.
///
/// Returns the store as the session left it, and everything the session
/// wrote to the console.
pub fn run_session(
    store: DocumentStore,
    store_path: &Path,
    provider: &RegistryCredentialProvider,
    script: &[&str],
) -> (DocumentStore, String) {
    let mut console = ScriptedConsole::new(script.iter().copied());
    let mut session = Session::new(store, store_path, &mut console, provider);
    session.run().expect("session should exit cleanly");
    let store = session.store().clone();
    (store, console.output().to_string())
}
