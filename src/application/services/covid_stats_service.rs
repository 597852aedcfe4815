//! Upstream statistics service.

use std::sync::Arc;

use crate::domain::StatsProvider;
use crate::domain::entities::{
    CountrySummaryRecord, PerDayCountryRecord, WorldTotals, to_country_summary_record,
    to_per_day_country_record,
};
use crate::error::UpstreamError;

/// Service turning upstream API responses into view records.
///
/// Each method issues exactly one upstream request and maps the result;
/// failures are returned untouched so the caller picks the response status.
pub struct CovidStatsService {
    provider: Arc<dyn StatsProvider>,
}

impl CovidStatsService {
    /// Creates a new statistics service.
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }

    /// World-wide totals for the homepage.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the API is unreachable or answers badly.
    pub async fn world_total(&self) -> Result<WorldTotals, UpstreamError> {
        self.provider.world_total().await
    }

    /// Per-day confirmed cases for one country, one record per upstream element.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the API is unreachable or answers badly.
    pub async fn country_records(
        &self,
        country: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<Vec<PerDayCountryRecord>, UpstreamError> {
        let series = self
            .provider
            .country_series(country, from_date, to_date)
            .await?;

        Ok(series.into_iter().map(to_per_day_country_record).collect())
    }

    /// Latest summary, one record per country.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the API is unreachable or answers badly.
    pub async fn country_summaries(&self) -> Result<Vec<CountrySummaryRecord>, UpstreamError> {
        let summary = self.provider.summary().await?;

        Ok(summary
            .countries
            .into_iter()
            .map(to_country_summary_record)
            .collect())
    }
}
