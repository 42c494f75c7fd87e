//! # Observability
//!
//! Structured logging for the vault. Logs are JSON lines on stderr; the
//! interactive console owns stdout.

pub mod logger;

pub use logger::{Logger, Severity};
