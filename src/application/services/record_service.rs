//! Saved records service.

use std::sync::Arc;

use crate::domain::entities::{NewRecord, SavedRecord};
use crate::domain::repositories::RecordRepository;
use crate::error::PersistenceError;

/// Service for the user's saved records.
///
/// A thin layer over [`RecordRepository`]: one statement per call, no validation
/// beyond what the form types already enforce.
pub struct RecordService {
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    /// Creates a new record service.
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// Saves a record.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] on database errors.
    pub async fn add_record(&self, new_record: NewRecord) -> Result<(), PersistenceError> {
        self.repository.insert(new_record).await
    }

    /// Lists every saved record in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] on database errors.
    pub async fn list_records(&self) -> Result<Vec<SavedRecord>, PersistenceError> {
        self.repository.list().await
    }

    /// Looks up one record; `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] on database errors.
    pub async fn get_record(&self, id: i64) -> Result<Option<SavedRecord>, PersistenceError> {
        self.repository.find_by_id(id).await
    }

    /// Deletes one record. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] on database errors.
    pub async fn delete_record(&self, id: i64) -> Result<(), PersistenceError> {
        let deleted = self.repository.delete(id).await?;

        if deleted == 0 {
            tracing::debug!(id, "Delete matched no record");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRecordRepository;
    use chrono::NaiveDate;

    fn create_test_record(id: i64) -> SavedRecord {
        SavedRecord::new(
            id,
            "Egypt".to_string(),
            100,
            5,
            80,
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_add_record_passes_fields_through() {
        let mut mock_repo = MockRecordRepository::new();

        mock_repo
            .expect_insert()
            .withf(|r| r.country_name == "Egypt" && r.total_deaths == 5)
            .times(1)
            .returning(|_| Ok(()));

        let service = RecordService::new(Arc::new(mock_repo));

        let result = service
            .add_record(NewRecord {
                country_name: "Egypt".to_string(),
                total_confirmed: 100,
                total_deaths: 5,
                total_recovered: 80,
                date: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_record_not_found() {
        let mut mock_repo = MockRecordRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(None));

        let service = RecordService::new(Arc::new(mock_repo));

        let result = service.get_record(7).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_records() {
        let mut mock_repo = MockRecordRepository::new();

        let records = vec![create_test_record(1), create_test_record(2)];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(records.clone()));

        let service = RecordService::new(Arc::new(mock_repo));

        let list = service.list_records().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, 2);
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_ok() {
        let mut mock_repo = MockRecordRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(0));

        let service = RecordService::new(Arc::new(mock_repo));

        assert!(service.delete_record(999).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_database_error() {
        let mut mock_repo = MockRecordRepository::new();

        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_| Err(sqlx::Error::PoolClosed.into()));

        let service = RecordService::new(Arc::new(mock_repo));

        assert!(service.delete_record(1).await.is_err());
    }
}
