//! Error types for the trending service
//!
//! One `thiserror` enum covers every failure the API can surface, and its
//! `IntoResponse` impl picks the HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Trending Error Enum ==
/// Unified error type for the trending service.
#[derive(Error, Debug)]
pub enum TrendingError {
    /// Requested category is not one of the supported identifiers
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// API key on a protected endpoint is missing or wrong
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Outbound request failed at the transport level
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog answered with a non-success status
    #[error("Fetch failed with status {0}")]
    Fetch(reqwest::StatusCode),

    /// Page was fetched but the state blob could not be extracted
    #[error("Extraction failed: {0}")]
    Extraction(String),

    /// Refresh failed and no cached value was available as fallback
    #[error("Refresh failed: {0}")]
    RefreshFailed(#[source] Box<TrendingError>),
}

// == IntoResponse Implementation ==
impl IntoResponse for TrendingError {
    fn into_response(self) -> Response {
        let status = match &self {
            TrendingError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            TrendingError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            TrendingError::Request(_)
            | TrendingError::Fetch(_)
            | TrendingError::Extraction(_)
            | TrendingError::RefreshFailed(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the trending service.
pub type Result<T> = std::result::Result<T, TrendingError>;
