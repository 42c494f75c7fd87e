//! Console I/O boundary
//!
//! The session and the registration flow never touch stdin/stdout directly;
//! they talk to a [`Console`]. [`StdConsole`] is the real terminal,
//! [`ScriptedConsole`] replays a fixed input script and captures output so
//! the whole state machine can be driven deterministically in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented console surface.
pub trait Console {
    /// Read one line, without its trailing newline.
    ///
    /// Returns `ErrorKind::UnexpectedEof` when the input is exhausted.
    fn read_line(&mut self) -> io::Result<String>;

    /// Write text without a newline (prompts), flushed immediately.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write a full line.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// The process's real terminal.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()
    }
}

/// Deterministic console for tests: replays a script, captures output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    /// Build a console that will return `lines` in order from `read_line`.
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<String> {
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
        })
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }
}
