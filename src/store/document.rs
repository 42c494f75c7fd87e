//! Document record types
//!
//! A document is owned by the operator that created it and carries a
//! classification fixed at creation time. Only the content is mutable.

use crate::policy::Level;

/// A stored document.
///
/// `classification` has no public mutator: it is assigned once, from the
/// creator's clearance, and never revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    owner: String,
    classification: Level,
    content: String,
}

impl Document {
    /// Create an empty document for `owner` at the given classification.
    pub fn new(owner: impl Into<String>, classification: Level) -> Self {
        Self {
            owner: owner.into(),
            classification,
            content: String::new(),
        }
    }

    /// Rebuild a document with existing content (used by the loader).
    pub fn with_content(
        owner: impl Into<String>,
        classification: Level,
        content: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            classification,
            content: content.into(),
        }
    }

    /// Identity of the creating operator.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Classification assigned at creation.
    pub fn classification(&self) -> Level {
        self.classification
    }

    /// Current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Append `text` after a single separating space.
    ///
    /// The separator is unconditional, so appending to a fresh document
    /// yields content starting with one space.
    pub fn append(&mut self, text: &str) {
        self.content.push(' ');
        self.content.push_str(text);
    }

    /// Replace the entire content.
    pub fn overwrite(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }
}
