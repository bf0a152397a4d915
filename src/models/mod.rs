//! Domain and API models for the trending service
//!
//! The category set and the normalized listing shape live here, along with
//! the DTOs serialized in and out of the HTTP layer.

pub mod category;
pub mod listing;
pub mod requests;
pub mod responses;

pub use category::Category;
pub use listing::{Listing, ListingStats};
pub use requests::{ClearCacheParams, TrendingParams};
pub use responses::{
    CacheStatus, ClearCacheResponse, HealthResponse, StatsResponse, TrendingResponse,
};
