//! A single cache slot.
//!
//! Pairs a value with the two instants the store's policies run on: when
//! the entry stops being servable and when it was last read.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// One stored value with its expiry and recency markers.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    /// Moment after which the entry must no longer be served
    pub expires_at: Instant,
    /// Moment of the most recent access, drives LRU eviction
    pub last_accessed: Instant,
}

impl<V> CacheEntry<V> {
    /// Wraps `value` in an entry expiring `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            expires_at: now + ttl,
            last_accessed: now,
        }
    }

    // == Is Expired ==
    /// Whether the entry may still be served.
    ///
    /// Boundary: expiry happens strictly after `expires_at`, so a read
    /// landing exactly on that instant still sees the value.
    pub fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }

    // == Touch ==
    /// Marks the entry as just accessed.
    pub fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }
}
