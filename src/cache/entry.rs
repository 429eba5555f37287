//! Cache Entry Module
//!
//! A stored value paired with its insertion time.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached value and the moment it was inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// The cached value, opaque to the cache
    pub data: T,
    /// Insertion timestamp (Unix milliseconds)
    pub timestamp: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(data: T) -> Self {
        Self::with_timestamp(data, current_timestamp_ms())
    }

    /// Creates an entry with an explicit insertion time.
    pub fn with_timestamp(data: T, timestamp: u64) -> Self {
        Self { data, timestamp }
    }

    // == Age ==
    /// Milliseconds elapsed since insertion, as seen at `now_ms`.
    ///
    /// Saturates at zero if the clock stepped backwards.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl_ms` at `now_ms`.
    ///
    /// Boundary condition: the comparison is strict, so an entry that is
    /// exactly `ttl_ms` old is still fresh.
    pub fn is_expired_at(&self, ttl_ms: u64, now_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }

    /// Checks expiry against the current wall clock.
    pub fn is_expired(&self, ttl_ms: u64) -> bool {
        self.is_expired_at(ttl_ms, current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A system clock set before the epoch reads as zero.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let before = current_timestamp_ms();
        let entry = CacheEntry::new("results".to_string());
        let after = current_timestamp_ms();

        assert_eq!(entry.data, "results");
        assert!(entry.timestamp >= before && entry.timestamp <= after);
    }

    #[test]
    fn test_fresh_entry_not_expired() {
        let entry = CacheEntry::new(42u32);
        assert!(!entry.is_expired(60_000));
    }

    #[test]
    fn test_expiration_boundary_is_strict() {
        let entry = CacheEntry::with_timestamp((), 1_000);

        // Exactly ttl old: still fresh
        assert!(!entry.is_expired_at(100, 1_100));
        // One millisecond past ttl: expired
        assert!(entry.is_expired_at(100, 1_101));
    }

    #[test]
    fn test_clock_step_backwards_is_not_expiry() {
        let entry = CacheEntry::with_timestamp((), 5_000);

        assert_eq!(entry.age_ms(4_000), 0);
        assert!(!entry.is_expired_at(1, 4_000));
    }

    #[test]
    fn test_entry_expires_after_sleep() {
        let entry = CacheEntry::new("v");

        sleep(Duration::from_millis(60));

        assert!(entry.is_expired(20));
        assert!(!entry.is_expired(60_000));
    }
}
