//! # In-Memory Document Store
//!
//! A map of filename to [`Document`], owned exclusively by the session for
//! the process lifetime. Synchronous and in-memory; nothing is durable until
//! the codec writes it out.
//!
//! ## Invariants
//! - Every key is a trimmed, non-empty string.
//! - Mutation goes through [`DocumentStore::get_mut`]: the stored entry is
//!   edited in place, never read out, modified, and written back.

use std::collections::BTreeMap;

pub mod document;
pub mod errors;

pub use document::Document;
pub use errors::{StoreError, StoreResult};

use crate::policy::Level;

/// The in-memory document store.
///
/// Backed by a `BTreeMap` so enumeration (listing, serialization) is in
/// deterministic name order.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    documents: BTreeMap<String, Document>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty document.
    ///
    /// The name is trimmed before insertion. Fails if the trimmed name is
    /// empty or already present; an existing document is never disturbed.
    pub fn create(
        &mut self,
        name: &str,
        owner: &str,
        classification: Level,
    ) -> StoreResult<&Document> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if self.documents.contains_key(name) {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }
        Ok(self
            .documents
            .entry(name.to_string())
            .or_insert_with(|| Document::new(owner, classification)))
    }

    /// Look up a document by name.
    pub fn get(&self, name: &str) -> StoreResult<&Document> {
        self.documents
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Mutable handle to a stored document.
    pub fn get_mut(&mut self, name: &str) -> StoreResult<&mut Document> {
        self.documents
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Whether a document with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// Insert or replace a document under a trimmed name.
    ///
    /// Used by the loader, where the last record for a name wins. Returns
    /// `EmptyName` if the trimmed name is empty.
    pub fn insert(&mut self, name: &str, document: Document) -> StoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        self.documents.insert(name.to_string(), document);
        Ok(())
    }

    /// Iterate documents in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.documents.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(raw: u8) -> Level {
        Level::new(raw).unwrap()
    }

    #[test]
    fn test_create_sets_owner_and_classification() {
        let mut store = DocumentStore::new();
        let doc = store.create("report", "alice", level(2)).unwrap();
        assert_eq!(doc.owner(), "alice");
        assert_eq!(doc.classification(), level(2));
        assert_eq!(doc.content(), "");
    }

    #[test]
    fn test_create_trims_name() {
        let mut store = DocumentStore::new();
        store.create("  report  ", "alice", level(0)).unwrap();
        assert!(store.contains("report"));
        assert!(!store.contains("  report  "));
    }

    #[test]
    fn test_create_empty_name_leaves_store_unchanged() {
        let mut store = DocumentStore::new();
        assert_eq!(
            store.create("", "alice", level(0)).unwrap_err(),
            StoreError::EmptyName
        );
        assert_eq!(
            store.create("   ", "alice", level(0)).unwrap_err(),
            StoreError::EmptyName
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_create_preserves_original() {
        let mut store = DocumentStore::new();
        store.create("report", "alice", level(2)).unwrap();
        store.get_mut("report").unwrap().overwrite("original text");

        let err = store.create("report", "bob", level(1)).unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists("report".to_string()));

        let doc = store.get("report").unwrap();
        assert_eq!(doc.owner(), "alice");
        assert_eq!(doc.classification(), level(2));
        assert_eq!(doc.content(), "original text");
    }

    #[test]
    fn test_get_unknown_name() {
        let store = DocumentStore::new();
        assert_eq!(
            store.get("missing").unwrap_err(),
            StoreError::NotFound("missing".to_string())
        );
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut store = DocumentStore::new();
        store.create("notes", "alice", level(1)).unwrap();
        store.get_mut("notes").unwrap().append("hello");
        assert_eq!(store.get("notes").unwrap().content(), " hello");
    }

    #[test]
    fn test_insert_last_wins() {
        let mut store = DocumentStore::new();
        store
            .insert("doc", Document::with_content("alice", level(1), "first"))
            .unwrap();
        store
            .insert("doc", Document::with_content("bob", level(2), "second"))
            .unwrap();
        assert_eq!(store.len(), 1);
        let doc = store.get("doc").unwrap();
        assert_eq!(doc.owner(), "bob");
        assert_eq!(doc.content(), "second");
    }

    #[test]
    fn test_iter_in_name_order() {
        let mut store = DocumentStore::new();
        store.create("zebra", "a", level(0)).unwrap();
        store.create("apple", "a", level(0)).unwrap();
        store.create("mango", "a", level(0)).unwrap();
        let names: Vec<&str> = store.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["apple", "mango", "zebra"]);
    }
}
