//! TTL/LRU cache store.
//!
//! HashMap-backed store where every entry carries its own expiry and
//! recency markers. Capacity pressure evicts the entry accessed longest
//! ago; expiry is detected lazily on read.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Bounded TTL cache evicting the least recently accessed entry at capacity.
///
/// The store itself is synchronous; callers share it behind a single lock so
/// every operation, including evict-then-insert, runs as one indivisible step.
#[derive(Debug)]
pub struct CacheStore<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
    max_entries: usize,
    ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    /// Creates an empty store holding at most `max_entries` entries, each
    /// servable for `ttl` after its last write.
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::default(),
            max_entries,
            ttl,
        }
    }

    // == Get ==
    /// Looks a key up and touches its recency.
    ///
    /// An expired entry is dropped on the spot and counted as a miss plus
    /// an expiration; a live one has its recency refreshed and is served
    /// as a clone.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.misses += 1;
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.expirations += 1;
            self.stats.misses += 1;
            self.stats.total_entries = self.entries.len();
            return None;
        }

        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.touch();
                self.stats.hits += 1;
                Some(entry.value.clone())
            }
            None => None,
        }
    }

    // == Set ==
    /// Stores a value under `key` with a fresh TTL and recency marker.
    ///
    /// Writing an existing key replaces its entry wholesale. A genuinely
    /// new key arriving at capacity first evicts the entry accessed longest
    /// ago, keeping `len() <= max_entries` after every call.
    pub fn set(&mut self, key: String, value: V) {
        let occupied = self.entries.contains_key(&key);

        if !occupied && self.entries.len() >= self.max_entries {
            if let Some(coldest) = self.lru_candidate() {
                self.entries.remove(&coldest);
                self.stats.evictions += 1;
            }
        }

        self.entries.insert(key, CacheEntry::new(value, self.ttl));
        self.stats.total_entries = self.entries.len();
    }

    // == Peek Stale ==
    /// Reads a value ignoring its expiry state.
    ///
    /// Backs the stale fallback path. The entry and the traffic counters are
    /// left untouched, so a later regular `get` still observes the expiry.
    pub fn peek_stale(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Delete ==
    /// Removes an entry, reporting whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.total_entries = self.entries.len();
        }
        removed
    }

    // == Clear ==
    /// Drops every entry unconditionally. Traffic counters keep their values.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.total_entries = 0;
    }

    // == Stats ==
    /// Snapshot of the traffic counters with a current entry count.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            ..self.stats
        }
    }

    /// Number of entries currently held, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key of the entry accessed longest ago.
    ///
    /// Ties resolve to the first minimal entry in iteration order.
    fn lru_candidate(&self) -> Option<String> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_accessed)
            .map(|(key, _)| key.clone())
    }
}
