//! Committed search and category browsing.
//!
//! Two modes share one scan:
//! - Search: entities whose multi-field set contains the normalized query.
//! - Browse: every entity of one category, unfiltered.
//!
//! Category precedence is fixed (organizations, people, posts, resources,
//! then video/clip projections) and catalog order is kept within a category.
//! There is no relevance ranking.

use crate::catalog::{classify, thumbnail_for, Catalog, ContentKind};
use crate::model::{Category, Content, Organization, Person, Resource, SourceType};
use crate::search::{contains_normalized, normalize, EntityRef};
use std::collections::HashSet;

/// Longest content title, in characters, before truncation.
const CONTENT_TITLE_MAX_CHARS: usize = 80;

// ===== SearchResult =====

/// One result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    /// `<source_type>_<entity_id>`; unique within a result set.
    pub id: String,
    /// Entity the row was projected from.
    pub source: EntityRef<'a>,
    /// Primary line.
    pub title: String,
    /// Secondary line; may be empty.
    pub subtitle: String,
    /// Longer text, if the entity has any.
    pub description: Option<String>,
    /// Short tag such as a role or exam.
    pub badge: Option<String>,
    /// Preview image URL for video links.
    pub thumbnail: Option<String>,
}

impl<'a> SearchResult<'a> {
    /// Kind of row.
    pub fn source_type(&self) -> SourceType {
        self.source.source_type()
    }

    fn from_person(person: &'a Person) -> Self {
        let source = EntityRef::Person(person);
        Self {
            id: source.scoped_id(),
            source,
            title: person.display_name.trim().to_string(),
            subtitle: person.contact_handle.trim().to_string(),
            description: None,
            badge: non_empty(&person.role_tag),
            thumbnail: None,
        }
    }

    fn from_organization(org: &'a Organization) -> Self {
        let source = EntityRef::Organization(org);
        Self {
            id: source.scoped_id(),
            source,
            title: org.name.trim().to_string(),
            subtitle: org.location_label.trim().to_string(),
            description: non_empty(&org.category_tag),
            badge: non_empty(&org.kind_tag),
            thumbnail: None,
        }
    }

    fn from_content(kind: ContentKind, content: &'a Content) -> Self {
        let source = match kind {
            ContentKind::Post => EntityRef::Post(content),
            ContentKind::Video => EntityRef::Video(content),
            ContentKind::Clip => EntityRef::Clip(content),
        };
        let badge = match kind {
            ContentKind::Post => content.engagement.summary(),
            ContentKind::Video => Some("Video".to_string()),
            ContentKind::Clip => Some("Clip".to_string()),
        };
        Self {
            id: source.scoped_id(),
            source,
            title: content_title(&content.body_text),
            subtitle: content.author_name.trim().to_string(),
            description: non_empty(&content.body_text),
            badge,
            thumbnail: thumbnail_for(content),
        }
    }

    fn from_resource(resource: &'a Resource) -> Self {
        let source = EntityRef::Resource(resource);
        Self {
            id: source.scoped_id(),
            source,
            title: resource.title.trim().to_string(),
            subtitle: resource.subject_tag.trim().to_string(),
            description: non_empty(&resource.description),
            badge: non_empty(&resource.exam_tag),
            thumbnail: None,
        }
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// First non-blank line of a body, truncated with an ellipsis.
fn content_title(body: &str) -> String {
    let line = body
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= CONTENT_TITLE_MAX_CHARS {
        line.to_string()
    } else {
        let mut title: String = line.chars().take(CONTENT_TITLE_MAX_CHARS - 1).collect();
        title.push('…');
        title
    }
}

// ===== Field Matching =====

fn person_matches(person: &Person, needle: &str) -> bool {
    [&person.display_name, &person.contact_handle, &person.role_tag]
        .into_iter()
        .any(|field| contains_normalized(field, needle))
}

fn organization_matches(org: &Organization, needle: &str) -> bool {
    [&org.name, &org.location_label, &org.kind_tag, &org.category_tag]
        .into_iter()
        .any(|field| contains_normalized(field, needle))
}

fn content_matches(content: &Content, needle: &str) -> bool {
    contains_normalized(&content.body_text, needle)
        || content.tags.iter().any(|tag| contains_normalized(tag, needle))
        || contains_normalized(&content.author_name, needle)
}

fn resource_matches(resource: &Resource, needle: &str) -> bool {
    [
        &resource.title,
        &resource.description,
        &resource.subject_tag,
        &resource.topic_tag,
    ]
    .into_iter()
    .any(|field| contains_normalized(field, needle))
        || resource.tags.iter().any(|tag| contains_normalized(tag, needle))
}

// ===== Scan =====

/// Result accumulator that drops rows whose id was already emitted.
#[derive(Default)]
struct ResultSet<'a> {
    rows: Vec<SearchResult<'a>>,
    ids: HashSet<String>,
}

impl<'a> ResultSet<'a> {
    fn push(&mut self, row: SearchResult<'a>) {
        if self.ids.insert(row.id.clone()) {
            self.rows.push(row);
        }
    }
}

/// Scan the catalog in category precedence order.
///
/// `needle` is the normalized query; `None` means browse (match everything).
fn scan<'a>(catalog: &'a Catalog, category: Category, needle: Option<&str>) -> Vec<SearchResult<'a>> {
    let mut set = ResultSet::default();

    if category.admits(SourceType::Organization) {
        for org in catalog.organizations() {
            if needle.is_none_or(|n| organization_matches(org, n)) {
                set.push(SearchResult::from_organization(org));
            }
        }
    }

    if category.admits(SourceType::Person) {
        for person in catalog.people() {
            if needle.is_none_or(|n| person_matches(person, n)) {
                set.push(SearchResult::from_person(person));
            }
        }
    }

    // Under All every content item is listed as a post; the posts chip keeps
    // only items classified as posts.
    if category.admits(SourceType::Post) {
        for content in catalog.content() {
            let listed_as_post = category == Category::All || classify(content) == ContentKind::Post;
            if listed_as_post && needle.is_none_or(|n| content_matches(content, n)) {
                set.push(SearchResult::from_content(ContentKind::Post, content));
            }
        }
    }

    if category.admits(SourceType::Resource) {
        for resource in catalog.resources() {
            if needle.is_none_or(|n| resource_matches(resource, n)) {
                set.push(SearchResult::from_resource(resource));
            }
        }
    }

    for content in catalog.content() {
        let kind = classify(content);
        if kind == ContentKind::Post || !category.admits(kind.source_type()) {
            continue;
        }
        if needle.is_none_or(|n| content_matches(content, n)) {
            set.push(SearchResult::from_content(kind, content));
        }
    }

    set.rows
}

/// Search mode: results for a committed query within `category`.
///
/// A query that normalizes to empty falls back to [`browse`].
pub fn search<'a>(catalog: &'a Catalog, query: &str, category: Category) -> Vec<SearchResult<'a>> {
    let needle = normalize(query);
    if needle.is_empty() {
        return browse(catalog, category);
    }
    scan(catalog, category, Some(&needle))
}

/// Browse mode: every entity in `category`, unfiltered.
///
/// `Category::All` cannot be browsed and yields no results.
pub fn browse(catalog: &Catalog, category: Category) -> Vec<SearchResult<'_>> {
    if category == Category::All {
        return Vec::new();
    }
    scan(catalog, category, None)
}

// ===== Tests =====

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
