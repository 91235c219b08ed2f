//! Entity identifier newtype with a smart constructor.
//!
//! Identifiers validate non-empty strings at construction time.
//! The raw constructor is never exported - use `EntityId::new` or deserialize.

use serde::Deserialize;
use std::fmt;

/// Identifier of a catalog entity, unique within its entity kind.
///
/// Ids from different kinds may collide; results namespace them by source type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Smart constructor: validates non-empty id (after trimming).
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidEntityId> {
        let s = raw.into();
        if s.trim().is_empty() {
            Err(InvalidEntityId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for EntityId {
    type Error = InvalidEntityId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ===== Error Types =====

/// Reasons an entity id is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEntityId {
    /// Blank or whitespace-only id.
    #[error("Entity ID cannot be empty")]
    Empty,
}

// ===== Tests =====
