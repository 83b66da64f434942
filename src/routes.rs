//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/courses/*`  - Course resource
//! - `/students/*` - Student resource
//! - `/health`     - Storage health check
//!
//! See [`crate::api::routes`] for the full endpoint table.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - `/courses/` and `/courses` route the same way

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
