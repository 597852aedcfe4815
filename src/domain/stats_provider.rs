//! Source of upstream COVID-19 statistics.

use crate::domain::entities::{CountryDay, GlobalSummary, WorldTotals};
use crate::error::UpstreamError;
use async_trait::async_trait;

/// Read-only access to the third-party statistics API.
///
/// Each method is a single GET; implementations neither retry nor cache.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::Covid19ApiClient`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// World-wide totals.
    async fn world_total(&self) -> Result<WorldTotals, UpstreamError>;

    /// Confirmed cases per day for `country` between two `YYYY-MM-DD` dates.
    ///
    /// `country` is placed in the request path as given.
    async fn country_series(
        &self,
        country: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<Vec<CountryDay>, UpstreamError>;

    /// Latest per-country summary.
    async fn summary(&self) -> Result<GlobalSummary, UpstreamError>;
}
