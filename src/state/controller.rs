//! Engine-facing discovery controller.
//!
//! Owns the catalog, the recent-search history and the trending cache, and
//! routes UI events through the pure transitions in [`crate::state::mode`].
//! Suggestions and results borrow from the controller, so they must be
//! dropped before the next event; a new keystroke always supersedes them.

use crate::catalog::{load_snapshot, Catalog, CatalogSnapshot, DataRepository};
use crate::config::ResolvedConfig;
use crate::history::{HistoryStore, JsonFileBackend};
use crate::model::Category;
use crate::search::{
    browse, search, suggest, SearchResult, Suggestion, TrendingAnalyzer, TrendingTerm,
    DEFAULT_SUGGESTION_LIMIT,
};
use crate::state::mode::{self, DiscoveryState, Submission};
use crate::state::view::{DiscoveryView, Landing};

/// Discovery session: current mode, category filter and the data it reads.
#[derive(Debug)]
pub struct DiscoveryController {
    catalog: Catalog,
    history: HistoryStore,
    trending: TrendingAnalyzer,
    state: DiscoveryState,
    category: Category,
    suggestion_limit: usize,
}

impl DiscoveryController {
    /// Idle controller over `catalog`; trending is computed immediately.
    pub fn new(catalog: Catalog, history: HistoryStore, trending: TrendingAnalyzer) -> Self {
        let mut trending = trending;
        trending.observe(&catalog);
        Self {
            catalog,
            history,
            trending,
            state: DiscoveryState::Idle,
            category: Category::All,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Controller with an empty catalog, file-backed history and the
    /// configured limits.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let history = HistoryStore::open(
            Box::new(JsonFileBackend::new(&config.history_file_path)),
            config.history_capacity,
        );
        Self::new(
            Catalog::default(),
            history,
            TrendingAnalyzer::new(config.trending_limit),
        )
        .with_suggestion_limit(config.suggestion_limit)
    }

    /// Override the number of suggestions returned per keystroke.
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    // ===== Accessors =====

    /// Current discovery mode.
    pub fn state(&self) -> &DiscoveryState {
        &self.state
    }

    /// Active category filter.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Catalog currently searched.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recent searches, newest first.
    pub fn history(&self) -> &[String] {
        self.history.terms()
    }

    /// Trending terms for the landing panel.
    pub fn trending(&self) -> &[TrendingTerm] {
        self.trending.terms()
    }

    // ===== Events =====

    /// The search field text changed. Returns suggestions for the new text.
    pub fn on_query_text_changed(&mut self, text: &str) -> Vec<Suggestion<'_>> {
        self.transition(|state| mode::edit_text(state, text));
        self.suggestions()
    }

    /// Commit `term` under `category`. Returns the search results.
    ///
    /// A non-blank term is added to the recent-search history. A blank term
    /// browses `category` (or goes Idle under `All`) and records nothing.
    pub fn on_commit(&mut self, term: &str, category: Category) -> Vec<SearchResult<'_>> {
        self.category = category;
        self.transition(|state| mode::commit(state, term, category));
        if let DiscoveryState::Submitted(Submission::Search(query)) = &self.state {
            self.history.append(query.as_str());
        }
        self.results()
    }

    /// A suggestion row was picked; commits its display text.
    pub fn on_suggestion_selected(&mut self, display_text: &str) -> Vec<SearchResult<'_>> {
        self.on_commit(display_text, self.category)
    }

    /// A recent-search entry was picked.
    pub fn on_history_selected(&mut self, term: &str) -> Vec<SearchResult<'_>> {
        self.on_commit(term, self.category)
    }

    /// A trending term was picked.
    pub fn on_trending_selected(&mut self, term: &str) -> Vec<SearchResult<'_>> {
        self.on_commit(term, self.category)
    }

    /// A category quick action: clear the text and browse `category`.
    pub fn on_quick_action(&mut self, category: Category) -> Vec<SearchResult<'_>> {
        self.category = category;
        self.transition(|state| mode::quick_action(state, category));
        self.results()
    }

    /// A category chip was selected.
    ///
    /// While Submitted the results follow the new category (search if text
    /// is present, browse otherwise); elsewhere only the filter changes.
    pub fn on_category_selected(&mut self, category: Category) {
        self.category = category;
        self.transition(|state| mode::select_category(state, category));
    }

    /// Explicit clear: Idle, category reset to All.
    pub fn on_clear(&mut self) {
        self.category = Category::All;
        self.transition(mode::clear);
    }

    /// Replace the catalog; trending is recomputed if content changed.
    pub fn on_catalog_refresh(&mut self, snapshot: CatalogSnapshot) {
        self.catalog.refresh(snapshot);
        self.trending.observe(&self.catalog);
    }

    /// Fetch a fresh snapshot from `repo` and apply it.
    pub async fn refresh_from<R>(&mut self, repo: &R)
    where
        R: DataRepository + ?Sized,
    {
        let snapshot = load_snapshot(repo).await;
        self.on_catalog_refresh(snapshot);
    }

    /// Drop one recent search; `false` if it was not present.
    pub fn remove_history(&mut self, term: &str) -> bool {
        self.history.remove(term)
    }

    /// Forget every recent search.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ===== Derived Output =====

    /// Suggestions for the current state (empty unless Typing).
    pub fn suggestions(&self) -> Vec<Suggestion<'_>> {
        match &self.state {
            DiscoveryState::Typing { text } => {
                suggest(&self.catalog, text, self.category, self.suggestion_limit)
            }
            DiscoveryState::Idle | DiscoveryState::Submitted(_) => Vec::new(),
        }
    }

    /// Results for the current state (empty unless Submitted).
    pub fn results(&self) -> Vec<SearchResult<'_>> {
        match &self.state {
            DiscoveryState::Submitted(Submission::Search(query)) => {
                search(&self.catalog, query.as_str(), self.category)
            }
            DiscoveryState::Submitted(Submission::Browse) => browse(&self.catalog, self.category),
            DiscoveryState::Idle | DiscoveryState::Typing { .. } => Vec::new(),
        }
    }

    /// What the panel should show right now.
    pub fn view(&self) -> DiscoveryView<'_> {
        match &self.state {
            DiscoveryState::Idle => DiscoveryView::Landing(self.landing()),
            DiscoveryState::Typing { .. } => {
                let suggestions = self.suggestions();
                if suggestions.is_empty() {
                    DiscoveryView::Landing(self.landing())
                } else {
                    DiscoveryView::Suggestions(suggestions)
                }
            }
            DiscoveryState::Submitted(submission) => DiscoveryView::Results {
                category: self.category,
                browsing: matches!(submission, Submission::Browse),
                results: self.results(),
            },
        }
    }

    fn landing(&self) -> Landing<'_> {
        Landing {
            history: self.history.terms(),
            trending: self.trending.terms(),
            quick_actions: &Category::BROWSABLE,
        }
    }

    fn transition(&mut self, f: impl FnOnce(DiscoveryState) -> DiscoveryState) {
        let previous = std::mem::take(&mut self.state);
        self.state = f(previous);
        tracing::debug!(state = ?self.state, category = %self.category, "discovery transition");
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
