//! Request DTOs for the search cache API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;

/// Request body for PUT /cache
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// Any JSON value to cache
    pub value: Value,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Request body for PUT /search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchStoreRequest {
    /// Free-text query the results belong to
    pub query: String,
    /// Computed results to memoize
    pub results: Value,
}

impl SearchStoreRequest {
    pub fn validate(&self) -> Option<String> {
        validate_query(&self.query)
    }
}

/// Query string for GET /search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

impl SearchParams {
    pub fn validate(&self) -> Option<String> {
        validate_query(&self.q)
    }
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

fn validate_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return Some("Query cannot be empty".to_string());
    }
    if query.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Query exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}
