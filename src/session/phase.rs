//! Session phases
//!
//! One variant per state that renders a prompt. List and Save are
//! synchronous menu actions, not phases: they consume no operator input of
//! their own and the session never leaves `Menu` to perform them.

/// Current state of the session machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Greeting; advances unconditionally without reading input.
    Initial,
    /// Collecting the candidate username.
    Username,
    /// Collecting the password and authenticating.
    Password,
    /// Awaiting a single-character command.
    Menu,
    /// Collecting the filename for Create.
    Create,
    /// Collecting the filename for Append.
    Append,
    /// Collecting the content for an approved Append.
    AppendContent,
    /// Collecting the filename for Read.
    Read,
    /// Collecting the filename for Write.
    Write,
    /// Awaiting shutdown confirmation.
    Exit,
}

impl Phase {
    /// Prompt text rendered on entry to this phase.
    pub fn prompt(self) -> &'static str {
        match self {
            Phase::Initial => "Welcome to the secure document vault.",
            Phase::Username => "Enter Username: ",
            Phase::Password => "Enter Password: ",
            Phase::Menu => {
                "Options: (C)reate, (A)ppend, (R)ead, (W)rite, (L)ist, (S)ave or (E)xit."
            }
            Phase::Create => "Enter Filename to Create: ",
            Phase::Append => "Enter Filename to Append: ",
            Phase::AppendContent => "Enter content to append and press Enter: ",
            Phase::Read => "Enter Filename to Read: ",
            Phase::Write => "Enter Filename to Write: ",
            Phase::Exit => "Shut down the vault? (Y)es or (N)o: ",
        }
    }

    /// Whether the prompt stays on one line awaiting input on the same row.
    pub fn prompt_inline(self) -> bool {
        !matches!(self, Phase::Initial | Phase::Menu)
    }
}
