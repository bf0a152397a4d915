//! API Module
//!
//! HTTP handlers and routing for the trending prompt REST API. The surface
//! is small: a trending lookup and a cache purge under `/api/prompts`, plus
//! `/stats`, `/health` and an index at `/`.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
