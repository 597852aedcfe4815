//! Url-encoded form for saving a record.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::domain::entities::NewRecord;

/// Body of `POST /myRecords`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordForm {
    pub country_name: String,
    pub total_confirmed: i64,
    pub total_deaths: i64,
    pub total_recovered: i64,
    #[serde(deserialize_with = "deserialize_record_date")]
    pub date: NaiveDate,
}

impl From<RecordForm> for NewRecord {
    fn from(form: RecordForm) -> Self {
        NewRecord {
            country_name: form.country_name,
            total_confirmed: form.total_confirmed,
            total_deaths: form.total_deaths,
            total_recovered: form.total_recovered,
            date: form.date,
        }
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 date-time such as the summary's
/// `2020-05-01T12:30:00Z`, keeping the calendar date.
pub fn parse_record_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
}

fn deserialize_record_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_record_date(&value).map_err(serde::de::Error::custom)
}
