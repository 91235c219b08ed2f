//! Discovery state machine.
//!
//! DiscoveryState is a sum type representing the three possible states:
//! - Idle: No text; landing panel (history, trending, quick actions)
//! - Typing: Uncommitted text; suggestions drive the view
//! - Submitted: Committed search or category browse; results drive the view
//!
//! All transition functions are pure - no side effects, testable without UI.
//! Persisting history and computing results happen in the controller.

use crate::model::Category;

// ===== DiscoveryState =====

/// Discovery state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiscoveryState {
    /// No query text.
    #[default]
    Idle,
    /// User is typing; text is never blank.
    Typing {
        /// Raw field text, untrimmed.
        text: String,
    },
    /// A committed search or a category browse.
    Submitted(Submission),
}

/// What was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Results filtered by a committed query.
    Search(SearchQuery),
    /// Unfiltered listing of the active category (text cleared).
    Browse,
}

impl DiscoveryState {
    /// Text currently in the search field.
    pub fn text(&self) -> &str {
        match self {
            DiscoveryState::Idle => "",
            DiscoveryState::Typing { text } => text,
            DiscoveryState::Submitted(Submission::Search(query)) => query.as_str(),
            DiscoveryState::Submitted(Submission::Browse) => "",
        }
    }

    /// No text in the field.
    pub fn is_idle(&self) -> bool {
        matches!(self, DiscoveryState::Idle)
    }

    /// Uncommitted text in the field.
    pub fn is_typing(&self) -> bool {
        matches!(self, DiscoveryState::Typing { .. })
    }

    /// A search or browse was submitted.
    pub fn is_submitted(&self) -> bool {
        matches!(self, DiscoveryState::Submitted(_))
    }

    /// A category browse was submitted.
    pub fn is_browsing(&self) -> bool {
        matches!(self, DiscoveryState::Submitted(Submission::Browse))
    }
}

// ===== SearchQuery =====

/// Validated committed query. Never blank; stored trimmed.
/// Smart constructor enforces the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: trims and validates the query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Transitions =====

/// Text in the search field changed.
///
/// From any state: blank text goes to Idle, anything else to Typing.
/// Editing while Submitted leaves the submission (and any browse).
pub fn edit_text(_state: DiscoveryState, text: &str) -> DiscoveryState {
    if text.trim().is_empty() {
        DiscoveryState::Idle
    } else {
        DiscoveryState::Typing {
            text: text.to_string(),
        }
    }
}

/// A term was committed (submitted, or picked from suggestions, history or
/// trending) under `category`.
///
/// A blank term browses `category` instead; blank under `All` goes to Idle
/// since `All` cannot be browsed.
pub fn commit(_state: DiscoveryState, term: &str, category: Category) -> DiscoveryState {
    match SearchQuery::new(term) {
        Some(query) => DiscoveryState::Submitted(Submission::Search(query)),
        None if category == Category::All => DiscoveryState::Idle,
        None => DiscoveryState::Submitted(Submission::Browse),
    }
}

/// A category chip was selected.
///
/// Only a Submitted browse changes state: browsing `All` is not possible, so
/// it falls back to Idle. A Submitted search stays as-is and is re-run by the
/// caller for the new category. Idle and Typing are unaffected.
pub fn select_category(state: DiscoveryState, category: Category) -> DiscoveryState {
    match state {
        DiscoveryState::Submitted(Submission::Browse) if category == Category::All => {
            DiscoveryState::Idle
        }
        other => other,
    }
}

/// A category quick action was triggered: clear the text and browse.
///
/// `All` cannot be browsed and goes to Idle.
pub fn quick_action(_state: DiscoveryState, category: Category) -> DiscoveryState {
    if category == Category::All {
        DiscoveryState::Idle
    } else {
        DiscoveryState::Submitted(Submission::Browse)
    }
}

/// Explicit clear: back to Idle from any state.
pub fn clear(_state: DiscoveryState) -> DiscoveryState {
    DiscoveryState::Idle
}

// ===== Tests =====

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
