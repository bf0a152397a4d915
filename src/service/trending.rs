//! Trending Service
//!
//! Orchestrates the cache, the rate limiter and the catalog client into the
//! public "get trending prompts" operation. A lookup is served from cache
//! when it can be; otherwise the service fetches under the limiter. Failed
//! refreshes fall back to stale data, and a forced refresh against a warm
//! cache can be deferred to the background worker.

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::error::{Result, TrendingError};
use crate::limiter::RateLimiter;
use crate::models::{CacheStatus, Category, Listing};
use crate::scrape::CatalogClient;
use crate::tasks::RefreshQueue;

// == Trending Service ==

/// Shared orchestrator for trending prompt lookups.
///
/// One instance is created at startup and shared behind an `Arc`; the cache
/// sits behind a single lock and the rate limiter is process wide, so every
/// caller goes through the same gates.
pub struct TrendingService {
    /// Cached listings keyed by category cache key
    cache: RwLock<CacheStore<Vec<Listing>>>,
    /// Spacing gate for outbound fetches, shared across all categories
    limiter: RateLimiter,
    /// HTTP client for the catalog origin
    catalog: CatalogClient,
}

impl TrendingService {
    /// Creates the service from configuration.
    ///
    /// Fails when the HTTP client cannot be built, e.g. on a malformed
    /// proxy URL.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            cache: RwLock::new(CacheStore::new(
                config.cache_size,
                config.cache_ttl_duration(),
            )),
            limiter: RateLimiter::new(config.request_delay_duration()),
            catalog: CatalogClient::from_config(config)?,
        })
    }

    // == Get Trending ==

    /// Returns trending listings for a category.
    ///
    /// The category is validated before any cache or network activity.
    /// Without `force_refresh` a fresh cached value is served directly;
    /// otherwise the listings are fetched from the origin, cached and
    /// returned. When the fetch fails, a previously cached value is served
    /// stale if one is still present, and only a miss on that fallback
    /// surfaces the failure.
    pub async fn get_trending(
        &self,
        category: &str,
        force_refresh: bool,
    ) -> Result<(Vec<Listing>, CacheStatus)> {
        let category: Category = category.parse()?;
        let cache_key = category.cache_key();

        if !force_refresh {
            let mut cache = self.cache.write().await;
            if let Some(listings) = cache.get(&cache_key) {
                debug!("Cache hit for '{}'", category);
                return Ok((listings, CacheStatus::FromCacheOrNew));
            }
        }

        match self.refresh(category).await {
            Ok(listings) => {
                let status = if force_refresh {
                    CacheStatus::Refreshed
                } else {
                    CacheStatus::FromCacheOrNew
                };
                Ok((listings, status))
            }
            Err(err) => {
                warn!("Refresh for '{}' failed: {}", category, err);
                let cache = self.cache.read().await;
                match cache.peek_stale(&cache_key) {
                    Some(listings) => {
                        info!("Serving stale cached prompts for '{}'", category);
                        Ok((listings, CacheStatus::StaleOnError))
                    }
                    None => Err(TrendingError::RefreshFailed(Box::new(err))),
                }
            }
        }
    }

    // == Deferred Refresh ==

    /// Like `get_trending`, but defers a forced refresh to the queue when a
    /// fresh cached value can be served right away.
    ///
    /// The caller gets the current cached listings immediately while an
    /// unconditional refresh runs on the background worker; failures of that
    /// refresh are logged by the worker and never surface here. Without a
    /// usable cached value, or without `force_refresh`, this behaves exactly
    /// like `get_trending`.
    pub async fn get_trending_or_defer(
        &self,
        category: &str,
        force_refresh: bool,
        queue: &RefreshQueue,
    ) -> Result<(Vec<Listing>, CacheStatus)> {
        if force_refresh {
            let parsed: Category = category.parse()?;
            let cached = {
                let mut cache = self.cache.write().await;
                cache.get(&parsed.cache_key())
            };
            if let Some(listings) = cached {
                queue.submit(parsed);
                return Ok((listings, CacheStatus::ReturningCachedUpdatingBackground));
            }
        }

        self.get_trending(category, force_refresh).await
    }

    // == Refresh ==

    /// Fetches a category from the origin unconditionally and caches the
    /// result, waiting on the rate limiter first.
    pub(crate) async fn refresh(&self, category: Category) -> Result<Vec<Listing>> {
        self.limiter.throttle().await;
        let listings = self.catalog.fetch_trending(category).await?;

        let mut cache = self.cache.write().await;
        cache.set(category.cache_key(), listings.clone());

        Ok(listings)
    }

    // == Cache Maintenance ==

    /// Returns a snapshot of the cache statistics.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Drops every cached entry.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
        info!("Cache cleared");
    }
}
