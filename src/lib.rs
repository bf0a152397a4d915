//! Trendbase - A trending prompt catalog server
//!
//! Scrapes trending listings from a remote prompt marketplace and serves
//! them through a rate-limited HTTP API backed by a TTL/LRU cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod limiter;
pub mod models;
pub mod scrape;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::TrendingService;
pub use tasks::RefreshQueue;
