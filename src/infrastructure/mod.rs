//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`upstream`] - HTTP client for the COVID-19 statistics API

pub mod persistence;
pub mod upstream;
