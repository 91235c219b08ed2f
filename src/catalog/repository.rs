//! Data repository boundary.
//!
//! The repository is the only suspending collaborator of the engine: it is
//! awaited once per catalog refresh, never per keystroke. Each slice may fail
//! independently; a failed slice degrades to empty without aborting the rest.

use crate::catalog::CatalogSnapshot;
use crate::model::{CatalogSlice, Content, DataLoadError, Organization, Person, Resource};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

// ===== DataRepository =====

/// Source of entity collections (the document database in production).
#[async_trait]
pub trait DataRepository: Send + Sync {
    /// List every person profile.
    async fn list_people(&self) -> Result<Vec<Person>, DataLoadError>;

    /// List every organization.
    async fn list_organizations(&self) -> Result<Vec<Organization>, DataLoadError>;

    /// List every content item.
    async fn list_content(&self) -> Result<Vec<Content>, DataLoadError>;

    /// List every learning resource.
    async fn list_resources(&self) -> Result<Vec<Resource>, DataLoadError>;
}

/// Fetch all four slices concurrently and assemble a snapshot.
///
/// Never fails: a slice whose fetch errors is logged and left empty.
#[tracing::instrument(skip_all)]
pub async fn load_snapshot<R>(repo: &R) -> CatalogSnapshot
where
    R: DataRepository + ?Sized,
{
    let (people, organizations, content, resources) = tokio::join!(
        repo.list_people(),
        repo.list_organizations(),
        repo.list_content(),
        repo.list_resources(),
    );

    CatalogSnapshot::new(
        or_empty(people),
        or_empty(organizations),
        or_empty(content),
        or_empty(resources),
    )
}

fn or_empty<T>(result: Result<Vec<T>, DataLoadError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        tracing::warn!(
            slice = %err.slice,
            reason = %err.reason,
            "catalog slice failed to load, continuing with an empty slice"
        );
        Vec::new()
    })
}

// ===== RefreshGate =====

/// Result of a gated refresh request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// This request performed the fetch.
    Fetched(CatalogSnapshot),
    /// Another fetch completed while this request waited; nothing was fetched.
    Coalesced,
}

impl RefreshOutcome {
    /// The fetched snapshot, or `None` when coalesced.
    pub fn into_snapshot(self) -> Option<CatalogSnapshot> {
        match self {
            RefreshOutcome::Fetched(snapshot) => Some(snapshot),
            RefreshOutcome::Coalesced => None,
        }
    }
}

/// Keeps at most one repository fetch in flight.
///
/// A request that arrives while a fetch is running waits for that fetch and
/// then returns [`RefreshOutcome::Coalesced`]; the waiting caller relies on
/// the snapshot delivered to whoever started the fetch.
#[derive(Debug, Default)]
pub struct RefreshGate {
    in_flight: Mutex<()>,
    completed: AtomicU64,
}

impl RefreshGate {
    /// Gate with no fetch in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fetches completed through this gate.
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Acquire)
    }

    /// Fetch from `repo` unless a concurrent fetch already covered this request.
    pub async fn refresh<R>(&self, repo: &R) -> RefreshOutcome
    where
        R: DataRepository + ?Sized,
    {
        let seen = self.completed();
        let _guard = self.in_flight.lock().await;

        if self.completed() != seen {
            tracing::debug!("refresh coalesced into a fetch that completed while waiting");
            return RefreshOutcome::Coalesced;
        }

        let snapshot = load_snapshot(repo).await;
        self.completed.fetch_add(1, Ordering::AcqRel);
        RefreshOutcome::Fetched(snapshot)
    }
}

// ===== StaticRepository =====

/// In-memory repository serving a fixed snapshot.
///
/// Slices can be marked as failing to exercise degraded loads.
#[derive(Debug, Clone, Default)]
pub struct StaticRepository {
    snapshot: CatalogSnapshot,
    failing: HashSet<CatalogSlice>,
}

impl StaticRepository {
    /// Repository serving every slice of `snapshot`.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot,
            failing: HashSet::new(),
        }
    }

    /// Make `slice` fail on every fetch.
    pub fn failing(mut self, slice: CatalogSlice) -> Self {
        self.failing.insert(slice);
        self
    }

    fn serve<T: Clone>(&self, slice: CatalogSlice, items: &[T]) -> Result<Vec<T>, DataLoadError> {
        if self.failing.contains(&slice) {
            Err(DataLoadError::new(slice, "slice unavailable"))
        } else {
            Ok(items.to_vec())
        }
    }
}

#[async_trait]
impl DataRepository for StaticRepository {
    async fn list_people(&self) -> Result<Vec<Person>, DataLoadError> {
        self.serve(CatalogSlice::People, self.snapshot.people())
    }

    async fn list_organizations(&self) -> Result<Vec<Organization>, DataLoadError> {
        self.serve(CatalogSlice::Organizations, self.snapshot.organizations())
    }

    async fn list_content(&self) -> Result<Vec<Content>, DataLoadError> {
        self.serve(CatalogSlice::Content, self.snapshot.content())
    }

    async fn list_resources(&self) -> Result<Vec<Resource>, DataLoadError> {
        self.serve(CatalogSlice::Resources, self.snapshot.resources())
    }
}
