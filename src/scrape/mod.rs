//! Scrape Module
//!
//! Fetches category pages from the catalog origin and extracts normalized
//! listings from their embedded state blobs.

pub mod extract;
pub mod fetch;

// Re-export the client most callers need
pub use fetch::CatalogClient;
