//! Searchable catalog.
//!
//! The catalog holds one immutable [`CatalogSnapshot`] of the four entity
//! collections. A refresh swaps the whole snapshot at once, so a reader never
//! observes slices from two different loads.

use crate::model::{Content, Organization, Person, Resource};
use std::sync::Arc;

pub mod classifier;
pub mod repository;

pub use classifier::{classify, is_clip, is_video, short_form, thumbnail_for, ContentKind};
pub use repository::{load_snapshot, DataRepository, RefreshGate, RefreshOutcome, StaticRepository};

// ===== CatalogSnapshot =====

/// One consistent version of every entity collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    people: Vec<Person>,
    organizations: Vec<Organization>,
    // Shared separately so caches can hold on to content alone.
    content: Arc<Vec<Content>>,
    resources: Vec<Resource>,
}

impl CatalogSnapshot {
    /// Snapshot over the four loaded slices.
    pub fn new(
        people: Vec<Person>,
        organizations: Vec<Organization>,
        content: Vec<Content>,
        resources: Vec<Resource>,
    ) -> Self {
        Self {
            people,
            organizations,
            content: Arc::new(content),
            resources,
        }
    }

    /// Snapshot with every slice empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Person profiles in load order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Organizations in load order.
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    /// Content items in load order.
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Shared handle to the content slice, independent of the other slices.
    pub fn shared_content(&self) -> Arc<Vec<Content>> {
        Arc::clone(&self.content)
    }

    /// Learning resources in load order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Total number of entities across all four slices.
    pub fn len(&self) -> usize {
        self.people.len() + self.organizations.len() + self.content.len() + self.resources.len()
    }

    /// Whether every slice is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ===== Catalog =====

/// Current snapshot plus the number of refreshes applied so far.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    snapshot: Arc<CatalogSnapshot>,
    generation: u64,
}

impl Catalog {
    /// Catalog serving `snapshot`, at generation 0.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            generation: 0,
        }
    }

    /// Replace all four slices with those of `snapshot`.
    pub fn refresh(&mut self, snapshot: CatalogSnapshot) {
        tracing::info!(
            people = snapshot.people().len(),
            organizations = snapshot.organizations().len(),
            content = snapshot.content().len(),
            resources = snapshot.resources().len(),
            "catalog refreshed"
        );
        self.snapshot = Arc::new(snapshot);
        self.generation += 1;
    }

    /// Shared handle to the current snapshot.
    ///
    /// The handle stays valid (and unchanged) across later refreshes.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Number of refreshes applied since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// People of the current snapshot.
    pub fn people(&self) -> &[Person] {
        self.snapshot.people()
    }

    /// Organizations of the current snapshot.
    pub fn organizations(&self) -> &[Organization] {
        self.snapshot.organizations()
    }

    /// Content of the current snapshot.
    pub fn content(&self) -> &[Content] {
        self.snapshot.content()
    }

    /// Resources of the current snapshot.
    pub fn resources(&self) -> &[Resource] {
        self.snapshot.resources()
    }
}

impl From<CatalogSnapshot> for Catalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self::new(snapshot)
    }
}
