//! CLI command implementations
//!
//! `init` bootstraps the configuration and data files, `register` creates an
//! operator, `run` starts the interactive session. Each command loads the
//! JSON configuration first; `run` additionally merges the persisted store
//! before handing control to the session.

use std::fs::{self, OpenOptions};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::auth::{
    register_user, CredentialRegistry, PasswordPolicy, RegistryCredentialProvider,
};
use crate::codec;
use crate::observability::Logger;
use crate::session::Session;
use crate::store::DocumentStore;

use super::args::{Cli, Command};
use super::console::StdConsole;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the persisted document store
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Path of the salt registry
    #[serde(default = "default_salt_path")]
    pub salt_path: String,

    /// Path of the shadow registry
    #[serde(default = "default_shadow_path")]
    pub shadow_path: String,
}

fn default_store_path() -> String {
    "Files.store".to_string()
}
fn default_salt_path() -> String {
    "salt.txt".to_string()
}
fn default_shadow_path() -> String {
    "shadow.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            salt_path: default_salt_path(),
            shadow_path: default_shadow_path(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Err(CliError::not_initialized());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.store_path.trim().is_empty() {
            return Err(CliError::config_error("store_path must not be empty"));
        }
        if self.salt_path.trim().is_empty() {
            return Err(CliError::config_error("salt_path must not be empty"));
        }
        if self.shadow_path.trim().is_empty() {
            return Err(CliError::config_error("shadow_path must not be empty"));
        }
        Ok(())
    }

    /// Registry handle for the configured credential files
    pub fn registry(&self) -> CredentialRegistry {
        CredentialRegistry::new(&self.salt_path, &self.shadow_path)
    }
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Init { config } => cmd_init(&config),
        Command::Register { config } => cmd_register(&config),
        Command::Run { config } => cmd_run(&config),
    }
}

/// Write the default configuration (if absent) and create empty data files.
fn cmd_init(config_path: &Path) -> CliResult<()> {
    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        let config = Config::default();
        fs::write(config_path, serde_json::to_string_pretty(&config)?)
            .map_err(|e| CliError::config_error(format!("Failed to write config: {}", e)))?;
        config
    };

    let store_path = Path::new(&config.store_path);
    if store_path.exists() {
        return Err(CliError::already_initialized(format!(
            "Store file already exists: {}",
            config.store_path
        )));
    }

    for path in [&config.store_path, &config.salt_path, &config.shadow_path] {
        touch(Path::new(path))?;
    }

    Logger::info("INIT_COMPLETE", &[("store", config.store_path.as_str())]);
    println!("Initialized vault (store: {})", config.store_path);
    Ok(())
}

/// Create an empty file, and its parent directories, if absent.
fn touch(path: &Path) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

/// Interactive registration against the configured registries.
fn cmd_register(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let registry = config.registry();
    let mut console = StdConsole::new();
    register_user(&mut console, &registry, &PasswordPolicy::default())?;
    Ok(())
}

/// Load the persisted store and drive a session over the real console.
fn cmd_run(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store_path = Path::new(&config.store_path);
    let mut store = DocumentStore::new();
    let report = codec::load_into(&mut store, store_path)?;
    Logger::info(
        "STORE_LOADED",
        &[
            ("loaded", &report.loaded.to_string()),
            ("skipped", &report.skipped.to_string()),
            ("path", config.store_path.as_str()),
        ],
    );

    let provider = RegistryCredentialProvider::new(config.registry());
    let mut console = StdConsole::new();
    let mut session = Session::new(store, store_path, &mut console, &provider);
    session.run()?;
    Ok(())
}
