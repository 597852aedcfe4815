//! Global per-country summary page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::CountrySummaryRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Renders `templates/allCountries.html`: one row per country, each with a form
/// posting it to `/myRecords`.
#[derive(Template, WebTemplate)]
#[template(path = "allCountries.html")]
pub struct AllCountriesTemplate {
    pub data: Vec<CountrySummaryRecord>,
}

/// # Endpoint
///
/// `GET /allCountries`
///
/// # Errors
///
/// Returns 400 with the error text if the upstream request fails.
pub async fn all_countries_handler(
    State(state): State<AppState>,
) -> Result<AllCountriesTemplate, AppError> {
    let data = state
        .stats_service
        .country_summaries()
        .await
        .map_err(AppError::Api)?;

    Ok(AllCountriesTemplate { data })
}
