//! Normalized listing records
//!
//! The typed shape every raw catalog record is reduced to before it is
//! cached or returned to callers.

use serde::{Deserialize, Serialize};

/// Usage statistics attached to a listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingStats {
    /// Number of page views
    pub views: u64,
    /// Number of downloads
    pub downloads: u64,
    /// Number of favorites
    pub favorites: u64,
    /// Average rating
    pub rating: f64,
    /// Number of sales
    pub sales: u64,
}

/// A single normalized catalog listing.
///
/// Immutable once constructed; produced only by the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Listing {
    /// Listing price, zero when the catalog omits it
    pub price: f64,
    /// Listing title, empty when the catalog omits it
    pub description: String,
    /// Usage statistics, zeroed when the catalog omits them
    pub statistics: ListingStats,
    /// Preview image URL, present only when the catalog carries a non-empty one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}
