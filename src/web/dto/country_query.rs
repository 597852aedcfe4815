//! Query string of the country lookup page.

use serde::Deserialize;

/// `GET /getCountryResult?countryName=..&fromDate=..&toDate=..`
///
/// Values are forwarded to the upstream API unchanged; dates are expected as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryQuery {
    pub country_name: String,
    pub from_date: String,
    pub to_date: String,
}
