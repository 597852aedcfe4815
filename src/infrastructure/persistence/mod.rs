//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! positional parameter binding.
//!
//! # Repositories
//!
//! - [`PgRecordRepository`] - Saved records in the `covid` table

pub mod pg_record_repository;

pub use pg_record_repository::PgRecordRepository;
