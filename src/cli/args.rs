//! CLI argument definitions using clap
//!
//! Commands:
//! - latticefs init --config <path>
//! - latticefs register --config <path>
//! - latticefs run --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// latticefs - A single-operator, mandatory-access-control document vault
#[derive(Parser, Debug)]
#[command(name = "latticefs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the configuration and empty data files
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./latticefs.json")]
        config: PathBuf,
    },

    /// Register a new operator interactively
    Register {
        /// Path to configuration file
        #[arg(long, default_value = "./latticefs.json")]
        config: PathBuf,
    },

    /// Start an interactive session
    Run {
        /// Path to configuration file
        #[arg(long, default_value = "./latticefs.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
