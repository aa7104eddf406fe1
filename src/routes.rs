//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Service banner
//! - `GET  /health`   - Health check (store ping)
//! - `GET  /{path}`   - Redirect to the stored URL, or fallback on a miss
//! - `/urls*`         - Mapping management (see [`crate::api::routes`])
//! - anything else    - Fallback responder
//!
//! `urls` and `health` are routes, so mappings stored under those keys can
//! never redirect.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline (408 on expiry)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler, redirect_handler, unmatched_handler};
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with every route and middleware except path
/// normalization.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/{path}", get(redirect_handler))
        .merge(api::routes::mapping_routes())
        .fallback(unmatched_handler)
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before
/// routing so `/docs/` resolves like `/docs`.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout))
}
