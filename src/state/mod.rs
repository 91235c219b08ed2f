//! Discovery state machine (pure) and the controller that drives it.
//!
//! Transitions in [`mode`] are pure functions testable without any engine;
//! [`controller`] wires them to the catalog, history and trending cache.

pub mod controller;
pub mod mode;
pub mod view;

pub use controller::DiscoveryController;
pub use mode::{DiscoveryState, SearchQuery, Submission};
pub use view::{DiscoveryView, Landing};
