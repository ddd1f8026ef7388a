//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `POST /shorturl`              - Create or reuse a mapping
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
/// - `GET  /health`                - Health check: store and cache
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
        .route("/health", get(health_handler))
}
