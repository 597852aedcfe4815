//! Domain layer containing entities and the contracts of external collaborators.
//!
//! # Architecture
//!
//! - [`entities`] - Saved rows, upstream wire shapes and view records
//! - [`repositories`] - Database access trait
//! - [`stats_provider`] - Upstream statistics API trait
//!
//! The domain layer has no dependencies on infrastructure or presentation layers;
//! the traits are implemented in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod stats_provider;

pub use stats_provider::StatsProvider;

#[cfg(test)]
pub use stats_provider::MockStatsProvider;
