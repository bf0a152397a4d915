//! Response bodies of the trending API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::listing::Listing;

/// How a trending response was produced with respect to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheStatus {
    /// Served from cache, or fetched because the cache had no entry
    FromCacheOrNew,
    /// Fetched because the caller forced a refresh
    Refreshed,
    /// Cached value served now, forced refresh submitted to the background queue
    ReturningCachedUpdatingBackground,
    /// Refresh failed, a previously cached value was served instead
    StaleOnError,
}

/// Body of GET /api/prompts/trending.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingResponse {
    /// The requested category identifier
    pub category: String,
    /// Normalized listings for the category
    pub prompts: Vec<Listing>,
    /// How this response relates to the cache
    pub cache_status: CacheStatus,
}

impl TrendingResponse {
    pub fn new(
        category: impl Into<String>,
        prompts: Vec<Listing>,
        cache_status: CacheStatus,
    ) -> Self {
        Self {
            category: category.into(),
            prompts,
            cache_status,
        }
    }
}

/// Body of POST /api/prompts/clear-cache.
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
}

impl ClearCacheResponse {
    /// The confirmation sent after a successful clear.
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
        }
    }
}

/// Body of GET /stats. Built by the handler from a cache snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// hits / (hits + misses), 0.0 before any traffic
    pub hit_rate: f64,
}

/// Body of GET /health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Serialized in RFC 3339 form
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
        }
    }
}
