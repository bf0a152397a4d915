//! Configuration Module
//!
//! Runtime settings, read once at startup from the process environment.

use std::env;
use std::time::Duration;

/// Built-in User-Agent pool used when `USER_AGENTS` is not set.
const DEFAULT_USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.0 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:95.0) Gecko/20100101 Firefox/95.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/94.0.4606.81 Safari/537.36",
];

/// Runtime settings for the service.
///
/// Every field can be overridden from the environment; missing or
/// unparsable values fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the catalog being scraped
    pub base_url: String,
    /// Cache entry TTL in seconds
    pub cache_ttl: u64,
    /// Entry capacity of the cache
    pub cache_size: usize,
    /// Minimum delay between outbound requests, in seconds
    pub request_delay: f64,
    /// Route outbound requests through a forward proxy
    pub use_proxy: bool,
    /// Forward proxy URL, used only when `use_proxy` is set
    pub proxy_url: String,
    /// User-Agent pool for outbound requests
    pub user_agents: Vec<String>,
    /// Pick a random pool member per request instead of always the first
    pub rotate_user_agents: bool,
    /// Key guarding the cache-clear endpoint
    pub api_key: String,
    /// Port the API listens on
    pub server_port: u16,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// Unset or unparsable variables keep their defaults:
    /// - `BASE_URL` - Catalog origin (default: https://promptbase.com)
    /// - `CACHE_TTL` - Cache entry TTL in seconds (default: 1800)
    /// - `CACHE_SIZE` - Maximum cache entries (default: 100)
    /// - `REQUEST_DELAY` - Minimum spacing between fetches in seconds (default: 1.0)
    /// - `USE_PROXY` - Route fetches through `PROXY_URL` (default: false)
    /// - `PROXY_URL` - Forward proxy URL (default: empty)
    /// - `USER_AGENTS` - Comma-separated User-Agent pool (default: built-in pool)
    /// - `ROTATE_USER_AGENTS` - Random User-Agent per fetch (default: true)
    /// - `API_KEY` - Cache-clear key (default: your-secret-api-key)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "https://promptbase.com".to_string()),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            cache_size: env::var("CACHE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            request_delay: env::var("REQUEST_DELAY")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(1.0),
            use_proxy: env::var("USE_PROXY")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            proxy_url: env::var("PROXY_URL").unwrap_or_default(),
            user_agents: env::var("USER_AGENTS")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|ua| ua.trim().to_string())
                        .filter(|ua| !ua.is_empty())
                        .collect::<Vec<_>>()
                })
                .filter(|pool| !pool.is_empty())
                .unwrap_or_else(default_user_agents),
            rotate_user_agents: env::var("ROTATE_USER_AGENTS")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            api_key: env::var("API_KEY").unwrap_or_else(|_| "your-secret-api-key".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Cache entry TTL as a Duration.
    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Minimum spacing between outbound fetches as a Duration.
    ///
    /// `from_env` only admits finite, non-negative delays; hand-built
    /// configs with anything else fall back to the default of one second.
    pub fn request_delay_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.request_delay).unwrap_or(Duration::from_secs(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://promptbase.com".to_string(),
            cache_ttl: 1800,
            cache_size: 100,
            request_delay: 1.0,
            use_proxy: false,
            proxy_url: String::new(),
            user_agents: default_user_agents(),
            rotate_user_agents: true,
            api_key: "your-secret-api-key".to_string(),
            server_port: 8000,
        }
    }
}

fn default_user_agents() -> Vec<String> {
    DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect()
}
