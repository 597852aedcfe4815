//! Repository trait for the saved records table.

use crate::domain::entities::{NewRecord, SavedRecord};
use crate::error::PersistenceError;
use async_trait::async_trait;

/// Repository interface for the `covid` table.
///
/// Every method runs exactly one parameterized statement; no transaction spans
/// two calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecordRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_record.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Inserts one row.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] on connection or constraint failures.
    async fn insert(&self, new_record: NewRecord) -> Result<(), PersistenceError>;

    /// Returns all rows in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] on database errors.
    async fn list(&self) -> Result<Vec<SavedRecord>, PersistenceError>;

    /// Finds a row by its primary key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SavedRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<SavedRecord>, PersistenceError>;

    /// Deletes a row by its primary key, returning the number of rows removed.
    ///
    /// Deleting an unknown id removes nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] on database errors.
    async fn delete(&self, id: i64) -> Result<u64, PersistenceError>;
}
