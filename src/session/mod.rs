//! # Session State Machine
//!
//! The top-level driver: a single-owner context holding the authenticated
//! identity, the clearance, the pending messages, and the document store,
//! advanced by one input line at a time.
//!
//! ## Invariants
//! - Every document operation consults the policy before touching the store.
//! - At most one pending error and one pending notice; each renders once.
//! - A handler failure sets a pending message and returns to `Menu`; it
//!   never aborts the loop. Only console I/O failure is fatal.

use std::path::PathBuf;

pub mod errors;
pub mod phase;

pub use errors::{SessionError, SessionResult};
pub use phase::Phase;

use crate::auth::CredentialProvider;
use crate::cli::console::Console;
use crate::codec;
use crate::observability::Logger;
use crate::policy::{can_read, check_read, check_write, Level};
use crate::store::DocumentStore;

/// Whether the run loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminate,
}

/// A single operator's interactive session.
///
/// Owns the document store for the process lifetime; credentials come in
/// only through the provider, console traffic only through the console.
pub struct Session<'a, C: Console, P: CredentialProvider> {
    phase: Phase,
    identity: String,
    clearance: Level,
    authenticated: bool,
    pending_error: Option<String>,
    pending_notice: Option<String>,
    active_filename: Option<String>,
    store: DocumentStore,
    store_path: PathBuf,
    console: &'a mut C,
    provider: &'a P,
}

impl<'a, C: Console, P: CredentialProvider> Session<'a, C, P> {
    pub fn new(
        store: DocumentStore,
        store_path: impl Into<PathBuf>,
        console: &'a mut C,
        provider: &'a P,
    ) -> Self {
        Self {
            phase: Phase::Initial,
            identity: String::new(),
            clearance: Level::MIN,
            authenticated: false,
            pending_error: None,
            pending_notice: None,
            active_filename: None,
            store,
            store_path: store_path.into(),
            console,
            provider,
        }
    }

    /// Drive the session until the operator confirms shutdown.
    pub fn run(&mut self) -> SessionResult<()> {
        Logger::info("SESSION_START", &[]);
        loop {
            self.render()?;
            if self.step()? == Outcome::Terminate {
                Logger::info("SESSION_END", &[("user", self.identity.as_str())]);
                return Ok(());
            }
        }
    }

    /// Current phase (for tests and diagnostics).
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether login has succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Clearance of the authenticated operator.
    pub fn clearance(&self) -> Level {
        self.clearance
    }

    /// The session's document store.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Surface pending messages once, then render the phase prompt.
    fn render(&mut self) -> SessionResult<()> {
        if let Some(error) = self.pending_error.take() {
            self.console.write_line(&format!("Error: {}", error))?;
        }
        if let Some(notice) = self.pending_notice.take() {
            self.console.write_line(&format!("Success: {}", notice))?;
        }
        if self.phase.prompt_inline() {
            self.console.write(self.phase.prompt())?;
        } else {
            self.console.write_line(self.phase.prompt())?;
        }
        Ok(())
    }

    /// Advance the machine by one transition.
    fn step(&mut self) -> SessionResult<Outcome> {
        match self.phase {
            Phase::Initial => {
                self.phase = Phase::Username;
                Ok(Outcome::Continue)
            }
            Phase::Username => self.handle_username(),
            Phase::Password => self.handle_password(),
            Phase::Menu => self.handle_menu(),
            Phase::Create => self.handle_create(),
            Phase::Append => self.handle_append(),
            Phase::AppendContent => self.handle_append_content(),
            Phase::Read => self.handle_read(),
            Phase::Write => self.handle_write(),
            Phase::Exit => self.handle_exit(),
        }
    }

    fn handle_username(&mut self) -> SessionResult<Outcome> {
        self.identity = self.console.read_line()?.trim().to_string();
        self.phase = Phase::Password;
        Ok(Outcome::Continue)
    }

    fn handle_password(&mut self) -> SessionResult<Outcome> {
        let password = self.console.read_line()?;
        match self.provider.authenticate(&self.identity, password.trim()) {
            Ok(clearance) => {
                self.clearance = clearance;
                self.authenticated = true;
                Logger::info(
                    "AUTH_OK",
                    &[
                        ("user", self.identity.as_str()),
                        ("clearance", &clearance.to_string()),
                    ],
                );
                self.phase = Phase::Menu;
            }
            Err(e) => {
                Logger::warn("AUTH_FAILED", &[("user", self.identity.as_str())]);
                self.pending_error = Some(format!("Authentication failed: {}", e));
                self.identity.clear();
                self.phase = Phase::Initial;
            }
        }
        Ok(Outcome::Continue)
    }

    fn handle_menu(&mut self) -> SessionResult<Outcome> {
        let input = self.console.read_line()?;
        match input.trim().to_lowercase().as_str() {
            "c" => self.phase = Phase::Create,
            "a" => self.phase = Phase::Append,
            "r" => self.phase = Phase::Read,
            "w" => self.phase = Phase::Write,
            "l" => self.list_files()?,
            "s" => self.save_store(),
            "e" => self.phase = Phase::Exit,
            _ => self.pending_error = Some("Invalid option. Try again.".to_string()),
        }
        Ok(Outcome::Continue)
    }

    fn handle_create(&mut self) -> SessionResult<Outcome> {
        let filename = self.console.read_line()?;
        match self.store.create(filename.trim(), &self.identity, self.clearance) {
            Ok(_) => {
                self.pending_notice =
                    Some(format!("File '{}' created successfully.", filename.trim()));
            }
            Err(e) => self.pending_error = Some(e.to_string()),
        }
        self.phase = Phase::Menu;
        Ok(Outcome::Continue)
    }

    fn handle_append(&mut self) -> SessionResult<Outcome> {
        let filename = self.console.read_line()?.trim().to_string();
        match self.check_writable(&filename) {
            Ok(()) => {
                self.active_filename = Some(filename);
                self.phase = Phase::AppendContent;
            }
            Err(message) => {
                self.pending_error = Some(message);
                self.phase = Phase::Menu;
            }
        }
        Ok(Outcome::Continue)
    }

    fn handle_append_content(&mut self) -> SessionResult<Outcome> {
        let content = self.console.read_line()?;
        if let Some(filename) = self.active_filename.take() {
            match self.store.get_mut(&filename) {
                Ok(doc) => {
                    doc.append(content.trim());
                    self.pending_notice =
                        Some(format!("Content appended to file '{}'.", filename));
                }
                Err(e) => self.pending_error = Some(e.to_string()),
            }
        }
        self.phase = Phase::Menu;
        Ok(Outcome::Continue)
    }

    fn handle_read(&mut self) -> SessionResult<Outcome> {
        let filename = self.console.read_line()?.trim().to_string();
        let outcome = match self.store.get(&filename) {
            Ok(doc) => check_read(self.clearance, doc.classification())
                .map(|()| doc.content().to_string())
                .map_err(|denied| format!("Access denied. {}", denied)),
            Err(e) => Err(e.to_string()),
        };
        match outcome {
            Ok(content) => {
                self.console.write_line("File content:")?;
                self.console.write_line(&content)?;
            }
            Err(message) => self.pending_error = Some(message),
        }
        self.phase = Phase::Menu;
        Ok(Outcome::Continue)
    }

    fn handle_write(&mut self) -> SessionResult<Outcome> {
        let filename = self.console.read_line()?.trim().to_string();
        if let Err(message) = self.check_writable(&filename) {
            self.pending_error = Some(message);
            self.phase = Phase::Menu;
            return Ok(Outcome::Continue);
        }

        self.console.write("Enter content to write: ")?;
        let content = self.console.read_line()?;
        match self.store.get_mut(&filename) {
            Ok(doc) => {
                doc.overwrite(content.trim());
                self.pending_notice =
                    Some(format!("File '{}' content overwritten.", filename));
            }
            Err(e) => self.pending_error = Some(e.to_string()),
        }
        self.phase = Phase::Menu;
        Ok(Outcome::Continue)
    }

    fn handle_exit(&mut self) -> SessionResult<Outcome> {
        let input = self.console.read_line()?;
        if input.trim().eq_ignore_ascii_case("y") {
            self.console.write_line("Exiting...")?;
            Ok(Outcome::Terminate)
        } else {
            self.phase = Phase::Menu;
            Ok(Outcome::Continue)
        }
    }

    /// No write down, shared by Append and Write.
    ///
    /// Returns the message to surface on lookup failure or denial.
    fn check_writable(&self, filename: &str) -> Result<(), String> {
        let doc = self.store.get(filename).map_err(|e| e.to_string())?;
        check_write(self.clearance, doc.classification()).map_err(|denied| {
            Logger::warn(
                "ACCESS_DENIED",
                &[
                    ("user", self.identity.as_str()),
                    ("file", filename),
                    ("detail", &denied.to_string()),
                ],
            );
            format!("Access denied. {}", denied)
        })
    }

    /// List every document the operator is cleared to read.
    fn list_files(&mut self) -> SessionResult<()> {
        let mut any = false;
        for (name, doc) in self.store.iter() {
            if can_read(self.clearance, doc.classification()) {
                self.console.write_line(&format!(
                    "File: {}, Owner: {}, Classification: {}",
                    name,
                    doc.owner(),
                    doc.classification()
                ))?;
                any = true;
            }
        }
        if !any {
            self.console.write_line("No accessible files found.")?;
        }
        Ok(())
    }

    /// Persist the whole store. Failure is surfaced, never swallowed.
    fn save_store(&mut self) {
        match codec::save(&self.store, &self.store_path) {
            Ok(()) => {
                Logger::info(
                    "STORE_SAVED",
                    &[
                        ("count", &self.store.len().to_string()),
                        ("path", &self.store_path.display().to_string()),
                    ],
                );
                self.pending_notice = Some(format!("Saved {} file(s).", self.store.len()));
            }
            Err(e) => {
                Logger::error("STORE_SAVE_FAILED", &[("detail", &e.to_string())]);
                self.pending_error = Some(e.to_string());
            }
        }
    }
}
