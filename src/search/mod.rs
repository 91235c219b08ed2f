//! Search engines (pure).
//!
//! Suggestion, query and trending computations are synchronous, infallible
//! functions over a [`Catalog`](crate::catalog::Catalog). Their outputs borrow
//! from the catalog and are recomputed on every call.

pub mod query;
pub mod suggestion;
pub mod trending;

pub use query::{browse, search, SearchResult};
pub use suggestion::{suggest, Suggestion, DEFAULT_SUGGESTION_LIMIT};
pub use trending::{TrendingAnalyzer, TrendingTerm, DEFAULT_TRENDING_LIMIT, FALLBACK_TRENDING};

use crate::model::{Content, EntityId, Organization, Person, Resource, SourceType};

// ===== EntityRef =====

/// Borrowed reference to the entity behind a suggestion or result.
///
/// Keyed by source type: a content item appears as `Post`, `Video` or `Clip`
/// depending on which projection produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef<'a> {
    /// A person profile.
    Person(&'a Person),
    /// A college or coaching organization.
    Organization(&'a Organization),
    /// A content item listed as a post.
    Post(&'a Content),
    /// A content item listed as a video.
    Video(&'a Content),
    /// A content item listed as a short clip.
    Clip(&'a Content),
    /// A study resource.
    Resource(&'a Resource),
}

impl<'a> EntityRef<'a> {
    /// Kind of row this reference produces.
    pub fn source_type(&self) -> SourceType {
        match self {
            EntityRef::Person(_) => SourceType::Person,
            EntityRef::Organization(_) => SourceType::Organization,
            EntityRef::Post(_) => SourceType::Post,
            EntityRef::Video(_) => SourceType::Video,
            EntityRef::Clip(_) => SourceType::Clip,
            EntityRef::Resource(_) => SourceType::Resource,
        }
    }

    /// Id of the underlying entity, without the source prefix.
    pub fn entity_id(&self) -> &'a EntityId {
        match self {
            EntityRef::Person(p) => &p.id,
            EntityRef::Organization(o) => &o.id,
            EntityRef::Post(c) | EntityRef::Video(c) | EntityRef::Clip(c) => &c.id,
            EntityRef::Resource(r) => &r.id,
        }
    }

    /// Namespaced id (`<source_type>_<entity_id>`).
    pub fn scoped_id(&self) -> String {
        self.source_type().scoped_id(self.entity_id())
    }

    /// Wrap a content item in the projection matching `source`.
    ///
    /// Returns `None` for non-content source types.
    pub(crate) fn content(source: SourceType, content: &'a Content) -> Option<Self> {
        match source {
            SourceType::Post => Some(EntityRef::Post(content)),
            SourceType::Video => Some(EntityRef::Video(content)),
            SourceType::Clip => Some(EntityRef::Clip(content)),
            SourceType::Person | SourceType::Organization | SourceType::Resource => None,
        }
    }
}

// ===== Normalization =====

/// Normalize query or field text for matching: trim + lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Case-insensitive containment of an already-normalized needle.
pub(crate) fn contains_normalized(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
