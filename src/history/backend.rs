//! History backends.

use crate::history::HistoryBackend;
use crate::model::StorageError;
use std::path::{Path, PathBuf};

// ===== MemoryBackend =====

/// Backend that keeps the list in process memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    terms: Vec<String>,
}

impl MemoryBackend {
    /// Backend pre-populated with `terms` (most recent first).
    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

impl HistoryBackend for MemoryBackend {
    fn get(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.terms.clone())
    }

    fn set(&mut self, terms: &[String]) -> Result<(), StorageError> {
        self.terms = terms.to_vec();
        Ok(())
    }
}

// ===== JsonFileBackend =====

/// Backend storing the list as a JSON array of strings in one file.
///
/// A missing file reads as an empty list. Parent directories are created on
/// first write.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Backend reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File holding the list.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryBackend for JsonFileBackend {
    fn get(&self) -> Result<Vec<String>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn set(&mut self, terms: &[String]) -> Result<(), StorageError> {
        let write_error = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let json = serde_json::to_string_pretty(terms).map_err(|e| write_error(e.into()))?;
        std::fs::write(&self.path, json).map_err(write_error)
    }
}
