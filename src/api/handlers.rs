//! Endpoint handlers.
//!
//! Thin axum handlers translating HTTP requests into calls on the shared
//! trending service and its response types into JSON bodies.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;

use crate::config::Config;
use crate::error::{Result, TrendingError};
use crate::models::{
    ClearCacheParams, ClearCacheResponse, HealthResponse, StatsResponse, TrendingParams,
    TrendingResponse,
};
use crate::service::TrendingService;
use crate::tasks::RefreshQueue;

/// State handed to every handler.
///
/// The orchestrator and the refresh queue sit behind `Arc` so the router can
/// be cloned per connection.
#[derive(Clone)]
pub struct AppState {
    /// Shared trending orchestrator
    pub service: Arc<TrendingService>,
    /// Queue feeding the background refresh worker
    pub refresher: Arc<RefreshQueue>,
    /// Key required by the cache-clear endpoint
    pub api_key: String,
}

impl AppState {
    /// Builds the trending service from configuration and spawns the
    /// background refresh worker.
    pub fn from_config(config: &Config) -> Result<Self> {
        let service = Arc::new(TrendingService::from_config(config)?);
        let refresher = Arc::new(RefreshQueue::spawn(service.clone()));
        Ok(Self {
            service,
            refresher,
            api_key: config.api_key.clone(),
        })
    }
}

/// GET /api/prompts/trending
///
/// Trending listings for the requested category. A forced refresh with a
/// cached value present is deferred to the background worker.
pub async fn trending_handler(
    State(state): State<AppState>,
    Query(params): Query<TrendingParams>,
) -> Result<Json<TrendingResponse>> {
    let (prompts, cache_status) = state
        .service
        .get_trending_or_defer(&params.category, params.force_refresh, &state.refresher)
        .await?;

    Ok(Json(TrendingResponse::new(
        params.category,
        prompts,
        cache_status,
    )))
}

/// POST /api/prompts/clear-cache
///
/// Drops every cached entry. Guarded by the configured API key.
pub async fn clear_cache_handler(
    State(state): State<AppState>,
    Query(params): Query<ClearCacheParams>,
) -> Result<Json<ClearCacheResponse>> {
    if params.api_key != state.api_key {
        return Err(TrendingError::InvalidApiKey);
    }

    state.service.clear_cache().await;

    Ok(Json(ClearCacheResponse::cleared()))
}

/// GET /stats, a snapshot of the cache traffic counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.cache_stats().await;

    Json(StatsResponse {
        hits: stats.hits,
        misses: stats.misses,
        evictions: stats.evictions,
        expirations: stats.expirations,
        total_entries: stats.total_entries,
        hit_rate: stats.hit_rate(),
    })
}

/// GET /health, the liveness probe.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /, a short index of the available endpoints.
pub async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Trendbase prompt catalog API",
        "endpoints": {
            "trending_prompts": "/api/prompts/trending?category={category}",
            "trending_prompts_force_refresh": "/api/prompts/trending?category={category}&force_refresh=true",
            "clear_cache": "/api/prompts/clear-cache?api_key={api_key}",
            "stats": "/stats",
            "health": "/health"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(base_url: &str) -> AppState {
        let config = Config {
            base_url: base_url.to_string(),
            request_delay: 0.0,
            user_agents: vec!["test-agent".to_string()],
            rotate_user_agents: false,
            ..Config::default()
        };
        AppState::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_trending_handler_returns_listings() {
        let mut server = mockito::Server::new_async().await;
        let page = r#"<html><head><script id="ng-state" type="application/json">{"Trending Prompts":[{"title":"Skyline","price":3.5}]}</script></head><body></body></html>"#;
        let mock = server
            .mock("GET", "/art-and-illustrations")
            .with_status(200)
            .with_body(page)
            .create_async()
            .await;
        let state = test_state(&server.url());

        let params = TrendingParams {
            category: "art".to_string(),
            force_refresh: false,
        };
        let Json(response) = trending_handler(State(state), Query(params)).await.unwrap();

        assert_eq!(response.category, "art");
        assert_eq!(response.prompts.len(), 1);
        assert_eq!(response.prompts[0].description, "Skyline");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_trending_handler_rejects_unknown_category() {
        let state = test_state("http://127.0.0.1:1");

        let params = TrendingParams {
            category: "sculpture".to_string(),
            force_refresh: false,
        };
        let result = trending_handler(State(state), Query(params)).await;

        assert!(matches!(result, Err(TrendingError::InvalidCategory(_))));
    }

    #[tokio::test]
    async fn test_clear_cache_handler_rejects_bad_key() {
        let state = test_state("http://127.0.0.1:1");

        let params = ClearCacheParams {
            api_key: "wrong".to_string(),
        };
        let result = clear_cache_handler(State(state), Query(params)).await;

        assert!(matches!(result, Err(TrendingError::InvalidApiKey)));
    }

    #[tokio::test]
    async fn test_clear_cache_handler_accepts_configured_key() {
        let state = test_state("http://127.0.0.1:1");

        let params = ClearCacheParams {
            api_key: state.api_key.clone(),
        };

        assert!(clear_cache_handler(State(state), Query(params)).await.is_ok());
    }

    #[tokio::test]
    async fn test_stats_handler_snapshot_starts_cold() {
        let state = test_state("http://127.0.0.1:1");

        let Json(snapshot) = stats_handler(State(state)).await;

        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.misses, 0);
        assert_eq!(snapshot.total_entries, 0);
        assert_eq!(snapshot.hit_rate, 0.0);
    }

    #[tokio::test]
    async fn test_health_handler_reports_healthy() {
        let Json(body) = health_handler().await;
        assert_eq!(body.status, "healthy");
    }
}
