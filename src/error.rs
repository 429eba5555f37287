//! Error types for the search cache
//!
//! Cache reads and writes never fail; errors only arise from construction
//! and at the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the search cache service.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache constructed with a zero capacity or TTL
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Key absent or expired
    #[error("Key not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the search cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (CacheError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (CacheError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                CacheError::InvalidConfig("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_display_includes_detail() {
        let error = CacheError::NotFound("query:cramps".to_string());
        assert_eq!(error.to_string(), "Key not found: query:cramps");
    }
}
