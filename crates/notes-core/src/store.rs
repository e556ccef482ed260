//! In-memory note store
//!
//! [`NoteStore`] maps note ids to note bodies. Ids are kept in a `BTreeMap`,
//! so enumeration order is the byte order of the ids and is identical every
//! time the same set of notes is listed.
//!
//! The store has no internal locking. It is owned by a single server and
//! mutated through `&mut self`; a server that accepts concurrent clients must
//! put it behind a lock so each `put`/`delete` is atomic with respect to
//! `get`/`list`.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{Error, Result};

/// Mapping from note id to note body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: BTreeMap<String, String>,
}

impl NoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given notes
    ///
    /// Entries with an empty id are skipped.
    pub fn from_seed<I, K, V>(seed: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = Self::new();
        store.extend(seed);
        store
    }

    /// Insert or overwrite a note
    ///
    /// Returns `true` when an existing body was replaced.
    pub fn put(&mut self, id: impl Into<String>, body: impl Into<String>) -> Result<bool> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::EmptyNoteId);
        }
        let replaced = self.notes.insert(id, body.into()).is_some();
        Ok(replaced)
    }

    /// Get the body of a note
    pub fn get(&self, id: &str) -> Result<&str> {
        self.notes
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| Error::NoteNotFound { id: id.to_string() })
    }

    /// Remove a note, returning its body
    pub fn delete(&mut self, id: &str) -> Result<String> {
        self.notes
            .remove(id)
            .ok_or_else(|| Error::NoteNotFound { id: id.to_string() })
    }

    /// Enumerate all note ids
    ///
    /// The returned iterator borrows the store; call `list` again to
    /// restart the enumeration.
    pub fn list(&self) -> impl Iterator<Item = &str> + '_ {
        self.notes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Add notes in bulk, overwriting existing ids
    ///
    /// Entries with an empty id are skipped.
    pub fn extend<I, K, V>(&mut self, notes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (id, body) in notes {
            let id = id.into();
            if id.is_empty() {
                debug!("Skipping seed note with empty id");
                continue;
            }
            self.notes.insert(id, body.into());
        }
    }
}
