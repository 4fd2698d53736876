//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /healthz`   - Liveness probe
//! - `GET /{code}`    - Short link redirect (302)
//! - `/api/links/*`   - Link management REST API
//!
//! `/healthz` is registered before the `/{code}` catch-all so it can never
//! be shadowed by a short code; `healthz` itself fails the 6-8 alphanumeric
//! pattern anyway.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
