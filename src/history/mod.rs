//! Recent-search history.
//!
//! A short most-recent-first list of committed terms. The list lives in
//! memory and is mirrored to a [`HistoryBackend`] after every change. Backend
//! failures are logged and otherwise ignored: the session keeps working with
//! its in-memory list.

use crate::model::StorageError;

pub mod backend;

pub use backend::{JsonFileBackend, MemoryBackend};

/// Number of recent terms kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

// ===== HistoryBackend =====

/// Key-value persistence for the history list.
pub trait HistoryBackend: std::fmt::Debug + Send {
    /// Load the stored list, most recent first.
    fn get(&self) -> Result<Vec<String>, StorageError>;

    /// Replace the stored list.
    fn set(&mut self, terms: &[String]) -> Result<(), StorageError>;
}

// ===== HistoryStore =====

/// Most-recent-first list of committed search terms, capped at `capacity`.
///
/// Owned by the discovery controller; there is no process-wide history.
#[derive(Debug)]
pub struct HistoryStore {
    backend: Box<dyn HistoryBackend>,
    terms: Vec<String>,
    capacity: usize,
}

impl HistoryStore {
    /// Open a store over `backend`, loading whatever it holds.
    ///
    /// A failed load starts from an empty list. Stored terms are cleaned the
    /// same way appended ones are (trimmed, blanks and duplicates dropped,
    /// capped to `capacity`).
    pub fn open(backend: Box<dyn HistoryBackend>, capacity: usize) -> Self {
        let stored = backend.get().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "history unavailable, starting with an empty list");
            Vec::new()
        });

        let mut terms: Vec<String> = Vec::with_capacity(capacity);
        for term in stored {
            let term = term.trim();
            if term.is_empty() || position_of(&terms, term).is_some() {
                continue;
            }
            terms.push(term.to_string());
        }
        terms.truncate(capacity);

        Self {
            backend,
            terms,
            capacity,
        }
    }

    /// Store with no persistence and the default capacity.
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryBackend::default()), DEFAULT_HISTORY_CAPACITY)
    }

    /// Recent terms, most recent first.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Maximum number of terms kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a committed term.
    ///
    /// Moves an existing entry (matched case-insensitively) to the front,
    /// adopting the new casing, or inserts it; then truncates to capacity.
    /// Blank terms are ignored.
    pub fn append(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() || self.capacity == 0 {
            return;
        }

        if let Some(pos) = position_of(&self.terms, term) {
            self.terms.remove(pos);
        }
        self.terms.insert(0, term.to_string());
        self.terms.truncate(self.capacity);
        self.persist();
    }

    /// Delete one term. Returns whether it was present.
    pub fn remove(&mut self, term: &str) -> bool {
        match position_of(&self.terms, term.trim()) {
            Some(pos) => {
                self.terms.remove(pos);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Delete every term.
    pub fn clear(&mut self) {
        self.terms.clear();
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(err) = self.backend.set(&self.terms) {
            tracing::warn!(error = %err, "failed to persist history, keeping in-memory copy");
        }
    }
}

fn position_of(terms: &[String], term: &str) -> Option<usize> {
    let needle = term.to_lowercase();
    terms.iter().position(|t| t.to_lowercase() == needle)
}

// ===== Tests =====

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
