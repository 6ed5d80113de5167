//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`             - Health check (public)
//! - `GET  /api/session`        - Resolve a secret link (public)
//! - `POST /api/books`          - Suggest a book (public)
//! - `POST /api/votes/toggle`   - Cast/retract a vote (public)
//! - `GET  /api/history`        - Club retrospective (public)
//! - `POST /api/admin/*`        - Club/semester/invite management (Bearer passcode)
//!
//! "Public" means link-gated: whoever holds a valid secret link may call
//! these; nothing beyond link obscurity is enforced.
//!
//! # Middleware
//!
//! - **Tracing** - per-request span with status and latency
//! - **Rate limiting** - per-IP token bucket, stricter on admin routes
//! - **Path normalization** - trailing slash handling

use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{admin_auth, rate_limit, tracing};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth::layer,
        ))
        .layer(rate_limit::admin_layer());

    let public_router = api::routes::public_routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", public_router.merge(admin_router))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
