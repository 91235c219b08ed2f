//! Catalog entity records.
//!
//! Four record kinds are searchable: people, organizations (colleges),
//! user-authored content, and learning resources. Records are plain data
//! decoded from the document store; the engine only ever reads them.

use crate::model::EntityId;
use serde::Deserialize;

// ===== Person =====

/// A user profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique profile id.
    pub id: EntityId,
    /// Name shown in suggestions and results.
    pub display_name: String,
    /// Contact handle or email.
    #[serde(default)]
    pub contact_handle: String,
    /// Role such as `student` or `mentor`.
    #[serde(default)]
    pub role_tag: String,
}

impl Person {
    /// Profile with every field given.
    pub fn new(
        id: EntityId,
        display_name: impl Into<String>,
        contact_handle: impl Into<String>,
        role_tag: impl Into<String>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            contact_handle: contact_handle.into(),
            role_tag: role_tag.into(),
        }
    }
}

// ===== Organization =====

/// A college, school or coaching institute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique organization id.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// City or region.
    #[serde(default)]
    pub location_label: String,
    /// Kind such as `college` or `coaching`.
    #[serde(default)]
    pub kind_tag: String,
    /// Discipline such as `engineering` or `medical`.
    #[serde(default)]
    pub category_tag: String,
}

impl Organization {
    /// Organization with every field given.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        location_label: impl Into<String>,
        kind_tag: impl Into<String>,
        category_tag: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location_label: location_label.into(),
            kind_tag: kind_tag.into(),
            category_tag: category_tag.into(),
        }
    }
}

// ===== Content =====

/// Declared media kind of a content item.
///
/// The declared kind is only a hint; see [`crate::catalog::classifier`] for
/// how a content item is actually classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Text only; classified by its link, if any.
    #[default]
    Text,
    /// Declared long-form video.
    Video,
    /// Declared short clip.
    Clip,
}

/// Reaction counters on a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EngagementCounts {
    /// Like count.
    pub likes: u64,
    /// Comment count.
    pub comments: u64,
    /// Share count.
    pub shares: u64,
}

impl EngagementCounts {
    /// Short human-readable summary, e.g. "12 likes · 3 comments".
    ///
    /// Zero counters are omitted. Returns `None` when every counter is zero.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<String> = [
            (self.likes, "like"),
            (self.comments, "comment"),
            (self.shares, "share"),
        ]
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, noun)| {
            if count == 1 {
                format!("1 {}", noun)
            } else {
                format!("{} {}s", count, noun)
            }
        })
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

/// A user-authored post, video or clip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Unique content id.
    pub id: EntityId,
    /// Free-form body; its first line doubles as the result title.
    pub body_text: String,
    /// Display name of the author.
    #[serde(default)]
    pub author_name: String,
    /// Ordered, may contain repeats in differing case.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Declared media kind.
    #[serde(default)]
    pub media_kind: MediaKind,
    /// Link to the playable media, if any.
    #[serde(default)]
    pub playable_link: Option<String>,
    /// Reaction counters.
    #[serde(default)]
    pub engagement: EngagementCounts,
}

impl Content {
    /// Plain text post with no tags, link or engagement.
    pub fn new(id: EntityId, body_text: impl Into<String>, author_name: impl Into<String>) -> Self {
        Self {
            id,
            body_text: body_text.into(),
            author_name: author_name.into(),
            tags: Vec::new(),
            media_kind: MediaKind::Text,
            playable_link: None,
            engagement: EngagementCounts::default(),
        }
    }

    /// Replace the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the declared media kind.
    pub fn with_media_kind(mut self, media_kind: MediaKind) -> Self {
        self.media_kind = media_kind;
        self
    }

    /// Attach a playable link.
    pub fn with_playable_link(mut self, link: impl Into<String>) -> Self {
        self.playable_link = Some(link.into());
        self
    }

    /// Set the reaction counters.
    pub fn with_engagement(mut self, engagement: EngagementCounts) -> Self {
        self.engagement = engagement;
        self
    }
}

// ===== Resource =====

/// A learning resource (notes, question bank, syllabus, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique resource id.
    pub id: EntityId,
    /// Display title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Subject such as `Physics`.
    #[serde(default)]
    pub subject_tag: String,
    /// Target exam such as `JEE Main`; shown, never searched.
    #[serde(default)]
    pub exam_tag: String,
    /// Topic within the subject.
    #[serde(default)]
    pub topic_tag: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Resource {
    /// Resource with only a title; other fields start empty.
    pub fn new(id: EntityId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            subject_tag: String::new(),
            exam_tag: String::new(),
            topic_tag: String::new(),
            tags: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the subject tag.
    pub fn with_subject(mut self, subject_tag: impl Into<String>) -> Self {
        self.subject_tag = subject_tag.into();
        self
    }

    /// Set the exam tag.
    pub fn with_exam(mut self, exam_tag: impl Into<String>) -> Self {
        self.exam_tag = exam_tag.into();
        self
    }

    /// Set the topic tag.
    pub fn with_topic(mut self, topic_tag: impl Into<String>) -> Self {
        self.topic_tag = topic_tag.into();
        self
    }

    /// Replace the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
