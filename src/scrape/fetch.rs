//! Catalog Fetch Module
//!
//! Outbound HTTP client for category pages: browser-shaped headers, an
//! optional forward proxy, and User-Agent rotation.

use std::time::Duration;

use reqwest::{header, Client, Proxy};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, TrendingError};
use crate::models::{Category, Listing};
use crate::scrape::extract;

/// Upper bound on a single page fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";
const ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7";

// == Catalog Client ==
/// HTTP client for the catalog origin.
///
/// Wraps the pooled `reqwest` client together with the User-Agent pool and
/// the origin it fetches category pages from. Compression is negotiated and
/// undone by the client itself, so fetched bodies arrive as plain markup.
#[derive(Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    user_agents: Vec<String>,
    rotate_user_agents: bool,
}

impl CatalogClient {
    // == Constructor ==
    /// Builds a client from the service configuration.
    ///
    /// Fails if the proxy URL is unusable or the underlying client cannot
    /// be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(default_headers());

        if config.use_proxy && !config.proxy_url.is_empty() {
            builder = builder.proxy(Proxy::all(&config.proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agents: config.user_agents.clone(),
            rotate_user_agents: config.rotate_user_agents,
        })
    }

    // == Fetch Page ==
    /// Fetches the raw markup of a category's trending page.
    ///
    /// A non-success status is a hard failure carrying the observed code;
    /// transport errors surface as request failures.
    pub async fn fetch_page(&self, category: Category) -> Result<String> {
        let url = format!("{}{}", self.base_url, category.path());
        debug!("Requesting {}", url);

        let mut request = self.client.get(&url);
        if let Some(agent) = self.pick_user_agent() {
            request = request.header(header::USER_AGENT, agent);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendingError::Fetch(status));
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes for category {}", html.len(), category);
        Ok(html)
    }

    // == Fetch Trending ==
    /// Runs the full pipeline for a category: fetch, locate the state blob,
    /// find the trending collection, normalize.
    ///
    /// A page without a trending collection yields an empty list; a page
    /// without a usable state blob is an extraction failure.
    pub async fn fetch_trending(&self, category: Category) -> Result<Vec<Listing>> {
        let html = self.fetch_page(category).await?;
        let blob = extract::state_blob(&html)?;

        let listings = match extract::find_trending_collection(&blob, category) {
            Some(collection) => extract::normalize_collection(collection),
            None => Vec::new(),
        };

        info!(
            "Extracted {} listings for category {}",
            listings.len(),
            category
        );
        Ok(listings)
    }

    /// Picks the User-Agent for one request.
    ///
    /// Rotation draws uniformly from the pool; otherwise the pool's first
    /// entry is pinned. An empty pool sends no User-Agent at all.
    fn pick_user_agent(&self) -> Option<&str> {
        if self.user_agents.is_empty() {
            return None;
        }
        let idx = if self.rotate_user_agents {
            fastrand::usize(..self.user_agents.len())
        } else {
            0
        };
        Some(self.user_agents[idx].as_str())
    }
}

/// Headers sent with every page fetch, shaped like a browser navigation.
fn default_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        header::HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers.insert(
        header::CONNECTION,
        header::HeaderValue::from_static("keep-alive"),
    );
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        header::HeaderValue::from_static("1"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("max-age=0"),
    );
    headers
}
