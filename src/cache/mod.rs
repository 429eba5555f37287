//! Cache Module
//!
//! Fixed-capacity, recency-ordered cache whose entries expire lazily after a TTL.

mod entry;
mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::{query_key, QUERY_KEY_PREFIX};
pub use lru::RecencyIndex;
pub use stats::CacheStats;
pub use store::LruCache;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_MAX_SIZE: usize = 50;

/// Entry lifetime in milliseconds used when none is configured (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;

/// Maximum accepted key length in bytes at the HTTP boundary
pub const MAX_KEY_LENGTH: usize = 256;
