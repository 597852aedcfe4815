//! HTTP client for the COVID-19 statistics API.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::StatsProvider;
use crate::domain::entities::{CountryDay, GlobalSummary, WorldTotals};
use crate::error::UpstreamError;

/// Widens a `YYYY-MM-DD` date to start-of-day UTC.
const START_OF_DAY: &str = "T00:00:00Z";

/// Client for `api.covid19api.com`-compatible endpoints.
///
/// Requests are plain GETs with no retry and no timeout beyond what the
/// underlying connection pool enforces.
#[derive(Clone)]
pub struct Covid19ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Covid19ApiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://api.covid19api.com`).
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn world_total_url(&self) -> String {
        format!("{}/world/total", self.base_url)
    }

    pub fn country_series_url(&self, country: &str, from_date: &str, to_date: &str) -> String {
        format!(
            "{}/country/{country}/status/confirmed?from={from_date}{START_OF_DAY}&to={to_date}{START_OF_DAY}",
            self.base_url
        )
    }

    pub fn summary_url(&self) -> String {
        format!("{}/summary", self.base_url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        tracing::debug!(url, "Fetching upstream statistics");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl StatsProvider for Covid19ApiClient {
    async fn world_total(&self) -> Result<WorldTotals, UpstreamError> {
        self.fetch(&self.world_total_url()).await
    }

    async fn country_series(
        &self,
        country: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<Vec<CountryDay>, UpstreamError> {
        self.fetch(&self.country_series_url(country, from_date, to_date))
            .await
    }

    async fn summary(&self) -> Result<GlobalSummary, UpstreamError> {
        self.fetch(&self.summary_url()).await
    }
}
