//! Top-level router combining pages, static files and middleware.
//!
//! # Request Path
//!
//! 1. **Method override** - `POST` + `_method=DELETE` becomes `DELETE`
//! 2. **Path normalization** - trailing slash trimmed
//! 3. **Tracing** - structured request/response logging
//! 4. **CORS** - any origin allowed
//! 5. Page routes, then static files from the configured directory

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{method_override, tracing};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::services::ServeDir;

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served for paths no page route matches
pub fn app_router(state: AppState, static_dir: &str) -> Router {
    let pages = web::routes::routes()
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    // Both layers must see the request before routing does, so the page router
    // is mounted as the fallback of an otherwise empty router.
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(pages);

    Router::new()
        .fallback_service(normalized)
        .layer(middleware::from_fn(method_override::layer))
}
