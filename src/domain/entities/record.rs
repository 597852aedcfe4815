//! Saved record entity backing the "my records" list.

use chrono::NaiveDate;

/// A row of the `covid` table.
///
/// Rows are independent snapshots chosen by the user; nothing keeps them in sync
/// with upstream data, and the same country/date pair may be saved more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRecord {
    pub id: i64,
    pub country_name: String,
    pub total_confirmed: i64,
    pub total_deaths: i64,
    pub total_recovered: i64,
    pub date: NaiveDate,
}

impl SavedRecord {
    /// Creates a new SavedRecord instance.
    pub fn new(
        id: i64,
        country_name: String,
        total_confirmed: i64,
        total_deaths: i64,
        total_recovered: i64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            country_name,
            total_confirmed,
            total_deaths,
            total_recovered,
            date,
        }
    }
}

/// Input data for inserting a record; the id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub country_name: String,
    pub total_confirmed: i64,
    pub total_deaths: i64,
    pub total_recovered: i64,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egypt() -> NewRecord {
        NewRecord {
            country_name: "Egypt".to_string(),
            total_confirmed: 100,
            total_deaths: 5,
            total_recovered: 80,
            date: NaiveDate::from_ymd_opt(2020, 5, 1).unwrap(),
        }
    }

    #[test]
    fn test_new_keeps_fields() {
        let input = egypt();
        let saved = SavedRecord::new(
            42,
            input.country_name.clone(),
            input.total_confirmed,
            input.total_deaths,
            input.total_recovered,
            input.date,
        );

        assert_eq!(saved.id, 42);
        assert_eq!(saved.country_name, "Egypt");
        assert_eq!(saved.total_recovered, 80);
        assert_eq!(saved.date, NaiveDate::from_ymd_opt(2020, 5, 1).unwrap());
    }
}
