//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`     - Create a short URL
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check (database)
//! - `GET  /`            - Landing page
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// `static_dir` is the directory served at `/static`, with its `index.html`
/// served at the root.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let index = format!("{}/index.html", static_dir.trim_end_matches('/'));

    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .route_service("/", ServeFile::new(index))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
