//! # CLI
//!
//! Argument parsing, configuration, the console boundary, and the command
//! dispatch that wires the subsystems together.

pub mod args;
pub mod commands;
pub mod console;
pub mod errors;

pub use commands::{run, Config};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use errors::{CliError, CliResult};
