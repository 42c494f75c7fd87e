//! Store file writer
//!
//! Serializes the whole store, one document per line:
//!
//! ```text
//! <filename>:<owner>:<classification>:<content>
//! ```
//!
//! Content is flattened before writing: every embedded newline becomes a
//! single space, so multi-line content is lossy across a save/load round
//! trip. The content field takes the remainder of the line and may itself
//! contain `:`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::errors::{CodecError, CodecResult};
use crate::store::{Document, DocumentStore};

/// Render one document as its store-file line (no trailing newline).
pub fn encode_line(name: &str, document: &Document) -> String {
    format!(
        "{}:{}:{}:{}",
        name.trim(),
        document.owner(),
        document.classification(),
        document.content().replace('\n', " ")
    )
}

/// Write the entire store to `path`, replacing any previous file.
///
/// Documents are written in name order, so the same store always produces
/// the same file.
pub fn save(store: &DocumentStore, path: &Path) -> CodecResult<()> {
    let file = File::create(path).map_err(|e| CodecError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for (name, document) in store.iter() {
        writeln!(writer, "{}", encode_line(name, document)).map_err(|e| {
            CodecError::WriteFailed {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
    }

    writer.flush().map_err(|e| CodecError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
