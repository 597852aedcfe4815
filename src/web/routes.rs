//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_record_handler, all_countries_handler, country_result_handler, delete_record_handler,
    home_handler, my_records_handler, record_details_handler,
};
use axum::{Router, routing::get};

/// All page routes.
///
/// # Endpoints
///
/// - `GET    /`                    - World totals
/// - `GET    /getCountryResult`    - Per-day cases for a country and date range
/// - `GET    /allCountries`        - Latest summary for every country
/// - `POST   /myRecords`           - Save a record, redirect to the list
/// - `GET    /myRecords`           - List saved records
/// - `GET    /recordsDetails/{id}` - One saved record
/// - `DELETE /recordsDetails/{id}` - Delete a saved record, redirect to the list
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/getCountryResult", get(country_result_handler))
        .route("/allCountries", get(all_countries_handler))
        .route(
            "/myRecords",
            get(my_records_handler).post(add_record_handler),
        )
        .route(
            "/recordsDetails/{id}",
            get(record_details_handler).delete(delete_record_handler),
        )
}
