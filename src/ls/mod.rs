//! Local search driver.
//!
//! Deterministic first-improvement hill climbing over 2-opt flips and
//! single-node relocations. Stops at a local optimum (`Converged`) or
//! when the time budget runs out (`TimeExpired`).

mod config;
mod runner;
mod types;

pub use config::LocalSearchConfig;
pub use runner::LocalSearchRunner;
pub use types::{LocalSearchResult, SearchState};
