//! What the discovery panel should display.

use crate::model::Category;
use crate::search::{SearchResult, Suggestion, TrendingTerm};

/// Panel contents derived from the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryView<'a> {
    /// Idle, or typing with no suggestions.
    Landing(Landing<'a>),
    /// Typing with at least one suggestion.
    Suggestions(Vec<Suggestion<'a>>),
    /// Submitted search or browse.
    Results {
        /// Category the results were produced under.
        category: Category,
        /// `true` for a browse, `false` for a text search.
        browsing: bool,
        /// Result rows in display order.
        results: Vec<SearchResult<'a>>,
    },
}

/// Landing panel: recent searches, trending terms and quick actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landing<'a> {
    /// Recent searches, newest first.
    pub history: &'a [String],
    /// Trending tags, most frequent first.
    pub trending: &'a [TrendingTerm],
    /// Categories offered as one-tap browse actions.
    pub quick_actions: &'static [Category],
}

impl DiscoveryView<'_> {
    /// Whether the landing panel is shown.
    pub fn is_landing(&self) -> bool {
        matches!(self, DiscoveryView::Landing(_))
    }
}
