//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with recency tracking and lazy TTL expiry.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{
    current_timestamp_ms, CacheEntry, CacheStats, RecencyIndex, DEFAULT_MAX_SIZE, DEFAULT_TTL_MS,
};
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Fixed-capacity cache with least-recently-used eviction and per-entry TTL.
///
/// Expired entries are only removed when read (or by an explicit
/// [`cleanup_expired`](Self::cleanup_expired) sweep), so [`size`](Self::size)
/// may count entries that [`get`](Self::get) would no longer return.
#[derive(Debug)]
pub struct LruCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Recency order of stored keys
    recency: RecencyIndex,
    /// Lookup and eviction counters
    stats: CacheStats,
    /// Maximum number of entries
    max_size: usize,
    /// Entry lifetime in milliseconds
    ttl_ms: u64,
}

impl<T> LruCache<T> {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries, must be at least 1
    /// * `ttl_ms` - Entry lifetime in milliseconds, must be at least 1
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidConfig`] if either parameter is zero.
    pub fn new(max_size: usize, ttl_ms: u64) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than zero".to_string(),
            ));
        }
        if ttl_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "ttl must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::new(),
            recency: RecencyIndex::new(),
            stats: CacheStats::new(),
            max_size,
            ttl_ms,
        })
    }

    /// Creates a cache holding 50 entries for 5 minutes each.
    pub fn with_defaults() -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyIndex::new(),
            stats: CacheStats::new(),
            max_size: DEFAULT_MAX_SIZE,
            ttl_ms: DEFAULT_TTL_MS,
        }
    }

    // == Set ==
    /// Stores `data` under `key`, stamped with the current time.
    ///
    /// An existing entry for `key` is dropped first, so the new value always
    /// lands in the most recent position with a fresh timestamp. If the cache
    /// is then full, exactly one least recently used entry is evicted.
    pub fn set(&mut self, key: impl Into<String>, data: T) {
        let key = key.into();

        if self.entries.remove(&key).is_some() {
            self.recency.remove(&key);
        }

        if self.entries.len() >= self.max_size {
            if let Some(evicted) = self.recency.pop_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "Evicted least recently used entry");
            }
        }

        self.recency.touch(&key);
        self.entries.insert(key, CacheEntry::new(data));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes every entry. Returns how many were stored.
    ///
    /// Hit, miss and eviction counters are kept.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.recency.clear();
        self.stats.set_total_entries(0);
        removed
    }

    // == Size ==
    /// Number of stored entries, including expired ones not yet removed.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes every expired entry.
    ///
    /// Not needed for correctness: reads already ignore expired entries.
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let ttl_ms = self.ttl_ms;
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(ttl_ms, now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.entries.remove(key);
            self.recency.remove(key);
        }

        self.stats.record_expirations(expired.len());
        self.stats.set_total_entries(self.entries.len());
        expired.len()
    }

    /// Drops `key` if its entry has outlived the TTL. Returns true if dropped.
    fn expire_if_stale(&mut self, key: &str) -> bool {
        let stale = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(self.ttl_ms, current_timestamp_ms()));

        if stale {
            self.entries.remove(key);
            self.recency.remove(key);
            self.stats.record_expirations(1);
            self.stats.set_total_entries(self.entries.len());
            trace!(key, "Expired entry removed on read");
        }
        stale
    }
}

impl<T: Clone> LruCache<T> {
    // == Get ==
    /// Returns a clone of the value stored under `key`.
    ///
    /// Returns `None` if the key is absent or its entry has expired; an
    /// expired entry is deleted as a side effect. A fresh hit moves the key
    /// to the most recently used position.
    pub fn get(&mut self, key: &str) -> Option<T> {
        if self.expire_if_stale(key) {
            self.stats.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Some(entry) => {
                let data = entry.data.clone();
                self.recency.touch(key);
                self.stats.record_hit();
                Some(data)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Returns true if `key` holds a fresh entry.
    ///
    /// Goes through [`get`](Self::get), so a hit also refreshes recency and
    /// an expired entry is removed, exactly as a read would.
    pub fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<T> Default for LruCache<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
