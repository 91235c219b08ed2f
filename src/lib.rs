//! Scout: multi-entity search and discovery engine.
//!
//! Searches an in-memory catalog of people, organizations, content and
//! learning resources. Provides live suggestions while typing, committed
//! search and category browsing, trending tags, and a persisted list of
//! recent searches.
//!
//! The engine is a pure core (catalog, search, state transitions) wrapped
//! by a thin shell that loads data, persists history and logs.

pub mod catalog;
pub mod config;
pub mod history;
pub mod logging;
pub mod model;
pub mod search;
pub mod state;
