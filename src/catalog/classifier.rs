//! Content classifier.
//!
//! Decides whether a content item is a post, a video or a short clip. The
//! decision is a URL-substring heuristic on the playable link; every caller
//! goes through [`classify`] so the heuristic can be swapped in one place.

use crate::model::{Content, MediaKind, SourceType};

/// Classified kind of a content item. Exactly one per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Plain post: no playable media.
    Post,
    /// Long-form playable video.
    Video,
    /// Short-form playable clip.
    Clip,
}

impl ContentKind {
    /// Source type used for ids and category filtering.
    pub fn source_type(&self) -> SourceType {
        match self {
            ContentKind::Post => SourceType::Post,
            ContentKind::Video => SourceType::Video,
            ContentKind::Clip => SourceType::Clip,
        }
    }
}

/// Whether a playable link points at short-form media.
pub fn short_form(link: &str) -> bool {
    link.contains("shorts")
}

/// Classify a content item.
///
/// A declared `Video`/`Clip` media kind wins. Otherwise a playable link makes
/// the item a clip (short-form link) or a video (any other link). Items with
/// neither are posts.
pub fn classify(content: &Content) -> ContentKind {
    match content.media_kind {
        MediaKind::Video => ContentKind::Video,
        MediaKind::Clip => ContentKind::Clip,
        MediaKind::Text => match content.playable_link.as_deref() {
            Some(link) if short_form(link) => ContentKind::Clip,
            Some(_) => ContentKind::Video,
            None => ContentKind::Post,
        },
    }
}

/// Whether `content` classifies as a video.
pub fn is_video(content: &Content) -> bool {
    classify(content) == ContentKind::Video
}

/// Whether `content` classifies as a clip.
pub fn is_clip(content: &Content) -> bool {
    classify(content) == ContentKind::Clip
}

/// Thumbnail URL for playable content hosted on YouTube.
///
/// Recognizes `watch?v=<id>`, `youtu.be/<id>`, `/shorts/<id>` and
/// `/embed/<id>` links. Posts and unrecognized hosts have no thumbnail.
pub fn thumbnail_for(content: &Content) -> Option<String> {
    if classify(content) == ContentKind::Post {
        return None;
    }
    let link = content.playable_link.as_deref()?;
    let video_id = youtube_video_id(link)?;
    Some(format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id))
}

fn youtube_video_id(link: &str) -> Option<&str> {
    const MARKERS: [&str; 4] = ["watch?v=", "youtu.be/", "/shorts/", "/embed/"];

    let start = MARKERS
        .iter()
        .find_map(|marker| link.find(marker).map(|pos| pos + marker.len()))?;
    let rest = &link[start..];
    let end = rest.find(['&', '?', '/', '#']).unwrap_or(rest.len());
    let id = &rest[..end];
    (!id.is_empty()).then_some(id)
}
