//! Cache traffic counters.
//!
//! Plain counters owned by the store, which bumps them inline as reads,
//! expirations and evictions happen. A snapshot is exposed on the stats
//! endpoint.

// == Cache Stats ==
/// Counters describing cache traffic since startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Reads answered from a live entry
    pub hits: u64,
    /// Reads that found nothing servable
    pub misses: u64,
    /// Entries pushed out to make room at capacity
    pub evictions: u64,
    /// Entries dropped because their TTL had passed
    pub expirations: u64,
    /// Entries currently held
    pub total_entries: usize,
}

impl CacheStats {
    /// Fraction of reads answered from cache, 0.0 when nothing was read yet.
    pub fn hit_rate(&self) -> f64 {
        let reads = self.hits + self.misses;
        if reads == 0 {
            return 0.0;
        }
        self.hits as f64 / reads as f64
    }
}
