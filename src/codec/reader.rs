//! Store file reader
//!
//! Rebuilds the in-memory store from the line format written by
//! [`super::writer`]. The loader is tolerant: a malformed line is skipped
//! (and logged at WARN), never fatal. An absent file is a first run and
//! loads as an empty store.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::errors::{CodecError, CodecResult, MalformedRecord};
use crate::observability::Logger;
use crate::policy::Level;
use crate::store::{Document, DocumentStore};

/// Outcome of a load: how many records were merged, how many were skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Parse one store-file line into `(filename, document)`.
///
/// The line has four colon-delimited fields; the content field takes the
/// remainder, so content may contain `:`. The filename is trimmed.
pub fn parse_line(line: &str) -> Result<(String, Document), MalformedRecord> {
    let mut parts = line.splitn(4, ':');
    let name = parts.next().unwrap_or_default().trim();
    let owner = parts.next().ok_or(MalformedRecord::MissingFields)?;
    let classification = parts.next().ok_or(MalformedRecord::MissingFields)?;
    let content = parts.next().ok_or(MalformedRecord::MissingFields)?;

    if name.is_empty() {
        return Err(MalformedRecord::EmptyFilename);
    }

    let classification: Level = classification
        .parse()
        .map_err(|_| MalformedRecord::BadClassification(classification.to_string()))?;

    Ok((
        name.to_string(),
        Document::with_content(owner, classification, content),
    ))
}

/// Merge the store file at `path` into `store`.
///
/// The merge is additive: existing in-memory documents are kept unless the
/// file carries a record under the same name. Within the file, the last
/// record for a name wins. Blank lines are ignored; malformed lines are
/// counted, logged, and skipped.
pub fn load_into(store: &mut DocumentStore, path: &Path) -> CodecResult<LoadReport> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        // First run: nothing persisted yet
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadReport::default()),
        Err(e) => {
            return Err(CodecError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let mut report = LoadReport::default();
    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok((name, document)) => {
                if store.insert(&name, document).is_ok() {
                    report.loaded += 1;
                } else {
                    report.skipped += 1;
                }
            }
            Err(reason) => {
                report.skipped += 1;
                Logger::warn(
                    "STORE_RECORD_SKIPPED",
                    &[
                        ("path", &path.display().to_string()),
                        ("line", &(index + 1).to_string()),
                        ("reason", &reason.to_string()),
                    ],
                );
            }
        }
    }
    Ok(report)
}

/// Load a store file into a fresh store.
pub fn load(path: &Path) -> CodecResult<DocumentStore> {
    let mut store = DocumentStore::new();
    load_into(&mut store, path)?;
    Ok(store)
}
