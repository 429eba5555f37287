//! API Routes
//!
//! Configures the Axum router with all search cache endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, clear_metrics_handler, get_handler, has_handler, health_handler,
    metrics_handler, search_get_handler, search_set_handler, set_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /cache` - Store a JSON value under a key
/// - `DELETE /cache` - Remove every entry
/// - `GET /cache/:key` - Retrieve a value by key
/// - `GET /cache/:key/exists` - Check a key without returning its value
/// - `GET /search?q=` - Look up memoized results for a query
/// - `PUT /search` - Memoize results for a query
/// - `GET /stats` - Cache counters and limits
/// - `GET /metrics` - Handler timing summaries
/// - `DELETE /metrics` - Reset handler timings
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache", put(set_handler).delete(clear_handler))
        .route("/cache/:key", get(get_handler))
        .route("/cache/:key/exists", get(has_handler))
        .route("/search", get(search_get_handler).put(search_set_handler))
        .route("/stats", get(stats_handler))
        .route("/metrics", get(metrics_handler).delete(clear_metrics_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::LruCache;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(LruCache::new(100, 300_000).unwrap());
        create_router(state)
    }

    async fn status_of(app: Router, method: &str, uri: &str, body: Body) -> StatusCode {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let status = status_of(create_test_app(), "GET", "/health", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let status = status_of(create_test_app(), "GET", "/stats", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_set_endpoint() {
        let body = Body::from(r#"{"key":"test","value":{"n":1}}"#);
        let status = status_of(create_test_app(), "PUT", "/cache", body).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let status = status_of(create_test_app(), "GET", "/cache/nonexistent", Body::empty()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_clear_endpoint() {
        let status = status_of(create_test_app(), "DELETE", "/cache", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let status = status_of(create_test_app(), "GET", "/search", Body::empty()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
