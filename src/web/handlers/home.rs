//! Homepage handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::WorldTotals;
use crate::error::AppError;
use crate::state::AppState;

/// Renders `templates/home.html` with world-wide totals.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub data: WorldTotals,
}

/// Renders the homepage.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// An upstream failure is reported as text with status `200 OK`
/// ([`AppError::ApiSoft`]).
pub async fn home_handler(State(state): State<AppState>) -> Result<HomeTemplate, AppError> {
    let data = state
        .stats_service
        .world_total()
        .await
        .map_err(AppError::ApiSoft)?;

    Ok(HomeTemplate { data })
}
