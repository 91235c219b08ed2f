//! Trending tags across content.
//!
//! Tags are counted under a normalized key (leading `#` stripped, trimmed,
//! lowercased). Terms are ranked by count with ties broken by first
//! appearance, and displayed in their first-seen casing with the first
//! letter capitalized.

use crate::catalog::Catalog;
use crate::model::Content;
use std::collections::HashMap;
use std::sync::Arc;

/// Number of trending terms shown.
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Shown when no content carries any tag.
pub const FALLBACK_TRENDING: [&str; 3] = ["JEE Preparation", "NEET", "Scholarships"];

// ===== TrendingTerm =====

/// One tag shown in the trending list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingTerm {
    /// Display form.
    pub label: String,
    /// Occurrences across all content; 0 for fallback terms.
    pub count: usize,
}

impl TrendingTerm {
    fn fallback() -> Vec<Self> {
        FALLBACK_TRENDING
            .iter()
            .map(|label| TrendingTerm {
                label: (*label).to_string(),
                count: 0,
            })
            .collect()
    }
}

// ===== Computation =====

/// Tag with its `#` prefix and surrounding whitespace removed.
fn strip_tag(tag: &str) -> &str {
    tag.trim().trim_start_matches('#').trim()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rank tags across `content`, returning at most `limit` terms.
///
/// Never returns an empty list: without any tags, the fixed fallback is used.
pub fn compute_trending(content: &[Content], limit: usize) -> Vec<TrendingTerm> {
    // (first-seen display form, count), in first-seen order
    let mut tallies: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tag in content.iter().flat_map(|c| c.tags.iter()) {
        let stripped = strip_tag(tag);
        if stripped.is_empty() {
            continue;
        }
        let key = stripped.to_lowercase();
        match index.get(&key) {
            Some(&slot) => tallies[slot].1 += 1,
            None => {
                index.insert(key, tallies.len());
                tallies.push((stripped, 1));
            }
        }
    }

    if tallies.is_empty() {
        return TrendingTerm::fallback();
    }

    // Stable sort keeps first-seen order among equal counts.
    tallies.sort_by(|a, b| b.1.cmp(&a.1));

    tallies
        .into_iter()
        .take(limit)
        .map(|(display, count)| TrendingTerm {
            label: capitalize_first(display),
            count,
        })
        .collect()
}

// ===== TrendingAnalyzer =====

/// Cached trending list, recomputed only when the content slice changes.
///
/// Only the content slice last ranked is retained, never the whole snapshot.
#[derive(Debug, Clone)]
pub struct TrendingAnalyzer {
    limit: usize,
    terms: Vec<TrendingTerm>,
    observed: Option<Arc<Vec<Content>>>,
}

impl Default for TrendingAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_TRENDING_LIMIT)
    }
}

impl TrendingAnalyzer {
    /// Analyzer showing at most `limit` terms; starts on the fallback list.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            terms: TrendingTerm::fallback(),
            observed: None,
        }
    }

    /// Cached trending list.
    pub fn terms(&self) -> &[TrendingTerm] {
        &self.terms
    }

    /// Bring the cached list up to date with `catalog`.
    ///
    /// Returns `true` if the list was recomputed.
    pub fn observe(&mut self, catalog: &Catalog) -> bool {
        let current = catalog.snapshot().shared_content();
        let unchanged = self
            .observed
            .as_ref()
            .is_some_and(|seen| Arc::ptr_eq(seen, &current) || **seen == *current);
        if !unchanged {
            self.terms = compute_trending(&current, self.limit);
            tracing::debug!(terms = self.terms.len(), "trending terms recomputed");
        }
        // Track the live slice so an equal but replaced one is released.
        self.observed = Some(current);
        !unchanged
    }
}
