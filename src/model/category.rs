//! Category filters and result source types.

use std::fmt;

// ===== Category =====

/// Category chip / quick action scoping a search.
///
/// `All` spans every entity kind. The content categories (`Posts`, `Videos`,
/// `Clips`) select content items by their classified kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Every entity kind; cannot be browsed.
    #[default]
    All,
    /// Person profiles.
    People,
    /// Organizations.
    Colleges,
    /// Content classified as posts.
    Posts,
    /// Content classified as videos.
    Videos,
    /// Content classified as clips.
    Clips,
    /// Learning resources.
    Resources,
}

impl Category {
    /// Every category that can be browsed without a query, in quick-action order.
    pub const BROWSABLE: [Category; 6] = [
        Category::People,
        Category::Colleges,
        Category::Posts,
        Category::Videos,
        Category::Clips,
        Category::Resources,
    ];

    /// Lowercase wire form, e.g. `colleges`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::People => "people",
            Category::Colleges => "colleges",
            Category::Posts => "posts",
            Category::Videos => "videos",
            Category::Clips => "clips",
            Category::Resources => "resources",
        }
    }

    /// Human-readable chip label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::People => "People",
            Category::Colleges => "Colleges",
            Category::Posts => "Posts",
            Category::Videos => "Videos",
            Category::Clips => "Clips",
            Category::Resources => "Resources",
        }
    }

    /// Parse a category from its string form. Unknown strings map to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Category::All),
            "people" => Some(Category::People),
            "colleges" => Some(Category::Colleges),
            "posts" => Some(Category::Posts),
            "videos" => Some(Category::Videos),
            "clips" => Some(Category::Clips),
            "resources" => Some(Category::Resources),
            _ => None,
        }
    }

    /// Whether this category admits results of the given source type.
    pub fn admits(&self, source: SourceType) -> bool {
        match self {
            Category::All => true,
            Category::People => source == SourceType::Person,
            Category::Colleges => source == SourceType::Organization,
            Category::Posts => source == SourceType::Post,
            Category::Videos => source == SourceType::Video,
            Category::Clips => source == SourceType::Clip,
            Category::Resources => source == SourceType::Resource,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== SourceType =====

/// Discriminant naming which entity kind (and content projection) a
/// suggestion or result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// A person profile.
    Person,
    /// An organization.
    Organization,
    /// Content listed as a post.
    Post,
    /// Content classified as a video.
    Video,
    /// Content classified as a clip.
    Clip,
    /// A learning resource.
    Resource,
}

impl SourceType {
    /// Prefix used in namespaced ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Person => "person",
            SourceType::Organization => "organization",
            SourceType::Post => "post",
            SourceType::Video => "video",
            SourceType::Clip => "clip",
            SourceType::Resource => "resource",
        }
    }

    /// Namespaced id, e.g. `video_p1`.
    pub fn scoped_id(&self, entity_id: &crate::model::EntityId) -> String {
        format!("{}_{}", self.as_str(), entity_id.as_str())
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
