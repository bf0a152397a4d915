//! Cache Module
//!
//! An in-memory store bounded by a TTL and a capacity limit, with traffic
//! counters the stats endpoint reports.

mod entry;
mod stats;
mod store;


pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
