//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod category;
pub mod entity;
pub mod error;
pub mod identifiers;

// Re-export for convenience
pub use category::{Category, SourceType};
pub use entity::{Content, EngagementCounts, MediaKind, Organization, Person, Resource};
pub use error::{CatalogSlice, DataLoadError, StorageError};
pub use identifiers::{EntityId, InvalidEntityId};
