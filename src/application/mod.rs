//! Application layer services.
//!
//! Services consume the domain traits and give HTTP handlers a small API:
//!
//! - [`services::CovidStatsService`] - Upstream statistics mapped to view records
//! - [`services::RecordService`] - Saved records CRUD

pub mod services;
