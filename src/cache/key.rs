//! Cache key helpers for search callers.

/// Prefix shared by every search query key
pub const QUERY_KEY_PREFIX: &str = "query:";

/// Builds a stable cache key for a free-text search query.
///
/// Queries that differ only in case or whitespace map to the same key.
pub fn query_key(query: &str) -> String {
    let normalized = query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}{}", QUERY_KEY_PREFIX, normalized)
}
