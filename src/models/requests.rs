//! Request DTOs for the trending API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for the trending endpoint (GET /api/prompts/trending).
///
/// `category` names the catalog section; `force_refresh` bypasses the
/// cached value and refetches from the origin.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingParams {
    /// Requested category identifier
    pub category: String,
    /// Bypass the cache and refetch
    #[serde(default)]
    pub force_refresh: bool,
}

/// Query parameters for the cache-clear endpoint (POST /api/prompts/clear-cache)
#[derive(Debug, Clone, Deserialize)]
pub struct ClearCacheParams {
    /// Key authorizing the operation; compared against the configured API key
    #[serde(default)]
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_params_force_refresh_defaults_off() {
        let json = r#"{"category": "art"}"#;
        let params: TrendingParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.category, "art");
        assert!(!params.force_refresh);
    }

    #[test]
    fn test_trending_params_with_force_refresh() {
        let json = r#"{"category": "games", "force_refresh": true}"#;
        let params: TrendingParams = serde_json::from_str(json).unwrap();
        assert!(params.force_refresh);
    }

    #[test]
    fn test_clear_cache_params_key_defaults_empty() {
        let params: ClearCacheParams = serde_json::from_str("{}").unwrap();
        assert!(params.api_key.is_empty());
    }
}
