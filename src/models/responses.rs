//! Response DTOs for the search cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::metrics::MetricStats;

/// Response body for GET /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The cached value
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for PUT /cache and PUT /search
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cached", key),
            key,
        }
    }
}

/// Response body for GET /cache/:key/exists
#[derive(Debug, Clone, Serialize)]
pub struct HasResponse {
    pub key: String,
    pub exists: bool,
}

impl HasResponse {
    pub fn new(key: impl Into<String>, exists: bool) -> Self {
        Self {
            key: key.into(),
            exists,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Entries dropped, expired ones included
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} entries", removed),
            removed,
        }
    }
}

/// Response body for GET /search
///
/// A miss is a normal answer: `hit` is false and `value` is null, telling the
/// caller to compute results and store them with PUT /search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Normalized cache key the query maps to
    pub key: String,
    pub hit: bool,
    pub value: Option<Value>,
}

impl SearchResponse {
    pub fn new(key: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            key: key.into(),
            hit: value.is_some(),
            value,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    /// Stored entries, expired ones not yet removed included
    pub total_entries: usize,
    pub max_size: usize,
    pub ttl_ms: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Builds the response from a stats snapshot and the cache limits.
    pub fn new(stats: &CacheStats, max_size: usize, ttl_ms: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            max_size,
            ttl_ms,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for GET /metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub metrics: BTreeMap<String, MetricStats>,
}

impl MetricsResponse {
    pub fn new(metrics: BTreeMap<String, MetricStats>) -> Self {
        Self { metrics }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
