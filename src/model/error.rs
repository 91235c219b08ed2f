//! Error types for the discovery engine.
//!
//! All fallibility is confined to two boundaries: refreshing the catalog from
//! the data repository and persisting recent-search history. The suggestion,
//! query and trending computations are total functions over loaded data and
//! have no error type.
//!
//! # Error Hierarchy
//!
//! - [`DataLoadError`] - one catalog slice failed to load
//! - [`StorageError`] - history backend read/write failure
//!
//! # Error Recovery Strategy
//!
//! Both errors are **non-fatal** and follow a log-and-continue-with-default
//! policy:
//!
//! - A failed slice is logged with `tracing::warn!` and replaced by an empty
//!   slice. The other three slices still load.
//! - A failed history read starts the session with an empty history; a failed
//!   write keeps the in-memory list so the session still sees its own commits.
//!
//! Neither error is surfaced to the user.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ===== CatalogSlice =====

/// One of the four entity collections that make up a catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSlice {
    /// Person profiles.
    People,
    /// Colleges and coaching institutes.
    Organizations,
    /// Posts, videos and clips.
    Content,
    /// Study resources.
    Resources,
}

impl CatalogSlice {
    /// Lowercase collection name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSlice::People => "people",
            CatalogSlice::Organizations => "organizations",
            CatalogSlice::Content => "content",
            CatalogSlice::Resources => "resources",
        }
    }
}

impl fmt::Display for CatalogSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== DataLoadError =====

/// A single catalog slice could not be fetched from the data repository.
///
/// **When this occurs**: During `load_snapshot`, when one of the repository's
/// list operations returns an error (network failure, permission denied,
/// malformed documents).
///
/// **Recovery**: The slice degrades to empty for this snapshot. The error is
/// logged, never surfaced.
///
/// # Examples
///
/// ```
/// use scout::model::{CatalogSlice, DataLoadError};
///
/// let err = DataLoadError::new(CatalogSlice::Content, "connection reset");
/// assert!(err.to_string().contains("content"));
/// assert!(err.to_string().contains("connection reset"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load {slice} slice: {reason}")]
pub struct DataLoadError {
    /// Which collection failed.
    pub slice: CatalogSlice,
    /// Repository-provided failure description.
    pub reason: String,
}

impl DataLoadError {
    /// Error for `slice` with the repository's reason.
    pub fn new(slice: CatalogSlice, reason: impl Into<String>) -> Self {
        Self {
            slice,
            reason: reason.into(),
        }
    }
}

// ===== StorageError =====

/// Errors from a recent-search history backend.
///
/// **Recovery**: `HistoryStore` logs these and continues with its in-memory
/// list. A session with a broken backend behaves like one with no persistence.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the persisted history failed.
    #[error("Failed to read history at {path:?}: {source}")]
    Read {
        /// Backing file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the history failed.
    #[error("Failed to write history at {path:?}: {source}")]
    Write {
        /// Backing file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The persisted history exists but is not a JSON array of strings.
    #[error("Corrupt history at {path:?}: {reason}")]
    Corrupt {
        /// Backing file path.
        path: PathBuf,
        /// Decoder error message.
        reason: String,
    },
}
