//! State Blob Extraction
//!
//! Pure functions that locate the embedded state blob in a fetched page,
//! find the trending collection inside it, and normalize raw records into
//! listings. Everything here is testable without touching the network.

use scraper::{Html, Selector};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, TrendingError};
use crate::models::{Category, Listing, ListingStats};

/// DOM id of the script element carrying the embedded state.
const STATE_SCRIPT_ID: &str = "ng-state";

/// Well-known key holding the trending collection.
const TRENDING_KEY: &str = "Trending Prompts";

/// Marker substring identifying trending-related keys.
const TRENDING_MARKER: &str = "Trending";

// == State Blob ==
/// Locates and decodes the embedded state blob of a fetched page.
///
/// A page whose script element is missing, or whose payload does not decode
/// into a JSON object, is a hard failure: callers must be able to tell a
/// broken page apart from a page that legitimately has no trending section.
pub fn state_blob(html: &str) -> Result<Map<String, Value>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(&format!("script#{}", STATE_SCRIPT_ID))
        .map_err(|e| TrendingError::Extraction(format!("invalid state selector: {}", e)))?;

    let script = document.select(&selector).next().ok_or_else(|| {
        TrendingError::Extraction(format!("script '{}' not found in page", STATE_SCRIPT_ID))
    })?;

    let text: String = script.text().collect();
    let value: Value = serde_json::from_str(&text)
        .map_err(|e| TrendingError::Extraction(format!("state blob is not valid JSON: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(TrendingError::Extraction(
            "state blob root is not an object".to_string(),
        )),
    }
}

// == Key Search ==
/// Finds the trending collection inside a decoded state blob.
///
/// Three strategies in order, first match wins: the exact well-known key,
/// then the first key containing both the marker and the category
/// identifier, then the first key containing the marker alone. Keys iterate
/// in the map's sorted order. No match is a valid absence, not an error.
pub fn find_trending_collection<'a>(
    blob: &'a Map<String, Value>,
    category: Category,
) -> Option<&'a Value> {
    if let Some(value) = blob.get(TRENDING_KEY) {
        debug!("Found exact trending key '{}'", TRENDING_KEY);
        return Some(value);
    }

    if let Some((key, value)) = blob
        .iter()
        .find(|(key, _)| key.contains(TRENDING_MARKER) && key.contains(category.as_str()))
    {
        debug!("Found trending key '{}' for category {}", key, category);
        return Some(value);
    }

    if let Some((key, value)) = blob.iter().find(|(key, _)| key.contains(TRENDING_MARKER)) {
        debug!("Found trending key '{}'", key);
        return Some(value);
    }

    None
}

// == Normalization ==
/// Normalizes the located collection into listing records.
///
/// The collection is an array whose elements are either arrays of raw
/// records or single raw records; one level is flattened. Elements that are
/// not objects are skipped silently, and a non-array collection yields no
/// listings.
pub fn normalize_collection(collection: &Value) -> Vec<Listing> {
    let groups = match collection.as_array() {
        Some(groups) => groups,
        None => return Vec::new(),
    };

    let mut listings = Vec::new();
    for group in groups {
        match group {
            Value::Array(records) => {
                listings.extend(records.iter().filter_map(normalize_record));
            }
            record => {
                if let Some(listing) = normalize_record(record) {
                    listings.push(listing);
                }
            }
        }
    }
    listings
}

/// Normalizes one raw record into a listing.
///
/// Absent numeric fields default to zero, the description falls back to an
/// empty string, and the preview URL is kept only when the raw image field
/// is a non-empty string. Non-object records yield None.
fn normalize_record(record: &Value) -> Option<Listing> {
    let fields = record.as_object()?;

    let statistics = ListingStats {
        views: u64_field(fields, "views"),
        downloads: u64_field(fields, "downloads"),
        favorites: u64_field(fields, "favorites"),
        rating: f64_field(fields, "rating"),
        sales: u64_field(fields, "sales"),
    };

    let preview_url = fields
        .get("image")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string);

    Some(Listing {
        price: f64_field(fields, "price"),
        description: fields
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        statistics,
        preview_url,
    })
}

fn u64_field(fields: &Map<String, Value>, key: &str) -> u64 {
    fields.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn f64_field(fields: &Map<String, Value>, key: &str) -> f64 {
    fields.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
