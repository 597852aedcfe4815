//! Wire shapes returned by the upstream statistics API.
//!
//! The API uses PascalCase keys. Record fields are optional: a missing key
//! deserializes to `None` instead of failing the whole response. The summary's
//! `Countries` list is required; bodies such as `{"Message": "Caching in progress"}`
//! are rejected as malformed.

use serde::Deserialize;

/// Body of `GET /world/total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WorldTotals {
    pub total_confirmed: Option<i64>,
    pub total_deaths: Option<i64>,
    pub total_recovered: Option<i64>,
}

/// One element of `GET /country/{country}/status/confirmed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CountryDay {
    pub country: Option<String>,
    pub cases: Option<i64>,
    pub date: Option<String>,
}

/// Body of `GET /summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSummary {
    pub countries: Vec<CountrySummary>,
}

/// One element of [`GlobalSummary::countries`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CountrySummary {
    pub country: Option<String>,
    pub total_confirmed: Option<i64>,
    pub total_deaths: Option<i64>,
    pub total_recovered: Option<i64>,
    pub date: Option<String>,
}
