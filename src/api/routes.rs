//! Route table.
//!
//! Assembles the router from the endpoint handlers and layers CORS and
//! request tracing over it.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_cache_handler, health_handler, root_handler, stats_handler, trending_handler, AppState,
};

/// Builds the application router.
///
/// Read endpoints are `GET`; the cache purge is a `POST`. CORS allows any
/// origin, and every request is traced.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/prompts/trending", get(trending_handler))
        .route("/api/prompts/clear-cache", post(clear_cache_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
