//! PostgreSQL implementation of the record repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRecord, SavedRecord};
use crate::domain::repositories::RecordRepository;
use crate::error::PersistenceError;

/// PostgreSQL repository for the `covid` table.
///
/// User values only ever reach the database as `$n` bind parameters.
pub struct PgRecordRepository {
    pool: Arc<PgPool>,
}

impl PgRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    country_name: String,
    total_confirmed: i64,
    total_deaths: i64,
    total_recovered: i64,
    date: NaiveDate,
}

impl From<RecordRow> for SavedRecord {
    fn from(r: RecordRow) -> Self {
        SavedRecord::new(
            r.id,
            r.country_name,
            r.total_confirmed,
            r.total_deaths,
            r.total_recovered,
            r.date,
        )
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn insert(&self, new_record: NewRecord) -> Result<(), PersistenceError> {
        sqlx::query(
            r#"
            INSERT INTO covid (country_name, total_confirmed, total_deaths, total_recovered, date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(new_record.country_name)
        .bind(new_record.total_confirmed)
        .bind(new_record.total_deaths)
        .bind(new_record.total_recovered)
        .bind(new_record.date)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<SavedRecord>, PersistenceError> {
        // No ORDER BY: rows come back in storage order.
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, country_name, total_confirmed, total_deaths, total_recovered, date
            FROM covid
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(SavedRecord::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SavedRecord>, PersistenceError> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, country_name, total_confirmed, total_deaths, total_recovered, date
            FROM covid
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(SavedRecord::from))
    }

    async fn delete(&self, id: i64) -> Result<u64, PersistenceError> {
        let result = sqlx::query("DELETE FROM covid WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
