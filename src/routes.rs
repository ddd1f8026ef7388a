//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Front page
//! - `/public/*`       - Static assets
//! - `/api/*`          - Mapping API and health check
//!
//! # Middleware
//!
//! - **CORS** - Any origin, method and header
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies the front page file and the static assets directory
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(&config.index_file))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .with_state(state)
        .layer(cors_layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Allows cross-origin calls from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
