//! Incremental suggestions while the user types.
//!
//! Scans the catalog in a fixed kind order (people, organizations, content,
//! resources), matching the query case-insensitively against one designated
//! field per kind. Output is capped and deduplicated.

use crate::catalog::{classify, thumbnail_for, Catalog};
use crate::model::{Category, SourceType};
use crate::search::{contains_normalized, normalize, EntityRef};
use std::collections::HashSet;

/// Maximum number of suggestions returned per keystroke.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

// ===== Suggestion =====

/// One suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion<'a> {
    /// Namespaced id (`<source_type>_<entity_id>`).
    pub id: String,
    /// Matched field of the originating entity, trimmed.
    pub display_text: &'a str,
    /// Entity the suggestion came from.
    pub source: EntityRef<'a>,
    /// Preview image URL for video links.
    pub thumbnail: Option<String>,
}

impl Suggestion<'_> {
    /// Kind of row.
    pub fn source_type(&self) -> SourceType {
        self.source.source_type()
    }
}

// ===== Collector =====

/// Accumulates suggestions, applying the per-kind dedup rule and the cap.
///
/// People and organizations dedup by namespaced id, so two people with the
/// same name stay distinct. Content and resources dedup by normalized text,
/// so identically worded posts collapse to one row.
struct Collector<'a> {
    limit: usize,
    out: Vec<Suggestion<'a>>,
    seen_ids: HashSet<String>,
    seen_texts: HashSet<String>,
}

impl<'a> Collector<'a> {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            out: Vec::new(),
            seen_ids: HashSet::new(),
            seen_texts: HashSet::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.out.len() >= self.limit
    }

    fn offer(&mut self, source: EntityRef<'a>, display_text: &'a str, thumbnail: Option<String>) {
        if self.is_full() {
            return;
        }
        let display_text = display_text.trim();
        let id = source.scoped_id();

        let fresh = match source {
            EntityRef::Person(_) | EntityRef::Organization(_) => self.seen_ids.insert(id.clone()),
            EntityRef::Post(_) | EntityRef::Video(_) | EntityRef::Clip(_) | EntityRef::Resource(_) => {
                self.seen_texts.insert(normalize(display_text))
            }
        };

        if fresh {
            self.out.push(Suggestion {
                id,
                display_text,
                source,
                thumbnail,
            });
        }
    }
}

// ===== Suggestion Execution =====

/// Compute suggestions for the text typed so far.
///
/// Empty or whitespace-only text yields no suggestions regardless of category.
/// The category restricts which kinds are scanned; the content categories
/// additionally filter content items by their classified kind.
pub fn suggest<'a>(
    catalog: &'a Catalog,
    text: &str,
    category: Category,
    limit: usize,
) -> Vec<Suggestion<'a>> {
    let needle = normalize(text);
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut collector = Collector::new(limit);

    if category.admits(SourceType::Person) {
        for person in catalog.people() {
            if collector.is_full() {
                break;
            }
            if contains_normalized(&person.display_name, &needle) {
                collector.offer(EntityRef::Person(person), &person.display_name, None);
            }
        }
    }

    if category.admits(SourceType::Organization) {
        for org in catalog.organizations() {
            if collector.is_full() {
                break;
            }
            if contains_normalized(&org.name, &needle) {
                collector.offer(EntityRef::Organization(org), &org.name, None);
            }
        }
    }

    for content in catalog.content() {
        if collector.is_full() {
            break;
        }
        let source = classify(content).source_type();
        if !category.admits(source) || !contains_normalized(&content.body_text, &needle) {
            continue;
        }
        if let Some(entity) = EntityRef::content(source, content) {
            collector.offer(entity, &content.body_text, thumbnail_for(content));
        }
    }

    if category.admits(SourceType::Resource) {
        for resource in catalog.resources() {
            if collector.is_full() {
                break;
            }
            if contains_normalized(&resource.title, &needle) {
                collector.offer(EntityRef::Resource(resource), &resource.title, None);
            }
        }
    }

    collector.out
}

// ===== Tests =====

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod tests;
