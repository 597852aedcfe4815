//! Per-country date range lookup.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};

use crate::domain::entities::PerDayCountryRecord;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::CountryQuery;

#[derive(Template, WebTemplate)]
#[template(path = "getCountryResult.html")]
pub struct CountryResultTemplate {
    pub country_name: String,
    pub from_date: String,
    pub to_date: String,
    pub data: Vec<PerDayCountryRecord>,
}

/// Renders confirmed cases per day for one country.
///
/// # Endpoint
///
/// `GET /getCountryResult?countryName=egypt&fromDate=2020-04-01&toDate=2020-04-05`
///
/// # Errors
///
/// Returns 400 with the error text if the upstream request fails.
pub async fn country_result_handler(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> Result<CountryResultTemplate, AppError> {
    let data = state
        .stats_service
        .country_records(&query.country_name, &query.from_date, &query.to_date)
        .await
        .map_err(AppError::Api)?;

    Ok(CountryResultTemplate {
        country_name: query.country_name,
        from_date: query.from_date,
        to_date: query.to_date,
        data,
    })
}
