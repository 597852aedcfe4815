//! Flat records rendered by the statistics pages.
//!
//! Built per request from upstream wire shapes by pure field renames; nothing is
//! validated or dropped.

use super::upstream::{CountryDay, CountrySummary};

/// One day of a country's confirmed-case series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerDayCountryRecord {
    pub country_name: Option<String>,
    pub cases: Option<i64>,
    pub date: Option<String>,
}

/// One country's line of the global summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySummaryRecord {
    pub country_name: Option<String>,
    pub total_confirmed: Option<i64>,
    pub total_deaths: Option<i64>,
    pub total_recovered: Option<i64>,
    pub date: Option<String>,
}

impl CountrySummaryRecord {
    /// Calendar part of `date` (`YYYY-MM-DD`), used when saving the row.
    pub fn day(&self) -> &str {
        let date = self.date.as_deref().unwrap_or_default();
        date.get(..10).unwrap_or(date)
    }
}

/// `Country`→`country_name`, `Cases`→`cases`, `Date`→`date`.
pub fn to_per_day_country_record(raw: CountryDay) -> PerDayCountryRecord {
    PerDayCountryRecord {
        country_name: raw.country,
        cases: raw.cases,
        date: raw.date,
    }
}

pub fn to_country_summary_record(raw: CountrySummary) -> CountrySummaryRecord {
    CountrySummaryRecord {
        country_name: raw.country,
        total_confirmed: raw.total_confirmed,
        total_deaths: raw.total_deaths,
        total_recovered: raw.total_recovered,
        date: raw.date,
    }
}

impl From<CountryDay> for PerDayCountryRecord {
    fn from(raw: CountryDay) -> Self {
        to_per_day_country_record(raw)
    }
}

impl From<CountrySummary> for CountrySummaryRecord {
    fn from(raw: CountrySummary) -> Self {
        to_country_summary_record(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_day_record_is_a_rename() {
        let raw = CountryDay {
            country: Some("Egypt".to_string()),
            cases: Some(1173),
            date: Some("2020-04-05T00:00:00Z".to_string()),
        };

        let record = to_per_day_country_record(raw);

        assert_eq!(record.country_name.as_deref(), Some("Egypt"));
        assert_eq!(record.cases, Some(1173));
        assert_eq!(record.date.as_deref(), Some("2020-04-05T00:00:00Z"));
    }

    #[test]
    fn test_per_day_record_keeps_missing_fields() {
        let record = to_per_day_country_record(CountryDay::default());

        assert_eq!(record, PerDayCountryRecord::default());
    }

    #[test]
    fn test_country_summary_record_is_a_rename() {
        let raw = CountrySummary {
            country: Some("Egypt".to_string()),
            total_confirmed: Some(100),
            total_deaths: Some(5),
            total_recovered: Some(80),
            date: Some("2020-05-01T12:30:00Z".to_string()),
        };

        let record: CountrySummaryRecord = raw.into();

        assert_eq!(record.country_name.as_deref(), Some("Egypt"));
        assert_eq!(record.total_confirmed, Some(100));
        assert_eq!(record.total_deaths, Some(5));
        assert_eq!(record.total_recovered, Some(80));
        assert_eq!(record.date.as_deref(), Some("2020-05-01T12:30:00Z"));
    }

    #[test]
    fn test_summary_day() {
        let mut record = CountrySummaryRecord {
            date: Some("2020-05-01T12:30:00Z".to_string()),
            ..Default::default()
        };
        assert_eq!(record.day(), "2020-05-01");

        record.date = Some("2020".to_string());
        assert_eq!(record.day(), "2020");

        record.date = None;
        assert_eq!(record.day(), "");
    }
}
