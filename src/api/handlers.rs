//! API Handlers
//!
//! HTTP request handlers for each search cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::cache::{query_key, LruCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::metrics::{PerformanceMonitor, Timer};
use crate::models::{
    ClearResponse, GetResponse, HasResponse, HealthResponse, MetricsResponse, SearchParams,
    SearchResponse, SearchStoreRequest, SetRequest, SetResponse, StatsResponse,
};

/// Cache holding arbitrary JSON values, as served over HTTP.
pub type SharedCache = Arc<RwLock<LruCache<Value>>>;

/// Application state shared across all handlers.
///
/// Owns the service's only cache and monitor. Both are created when the
/// service starts and dropped with it.
#[derive(Clone)]
pub struct AppState {
    /// Cache store behind a single lock; every operation takes it exclusively
    pub cache: SharedCache,
    /// Handler timing samples
    pub monitor: Arc<RwLock<PerformanceMonitor>>,
}

impl AppState {
    /// Creates a new AppState around the given cache and a fresh monitor.
    pub fn new(cache: LruCache<Value>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            monitor: Arc::new(RwLock::new(PerformanceMonitor::new())),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity or TTL is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = LruCache::new(config.max_size, config.ttl_ms)?;
        Ok(Self::new(cache))
    }

    async fn start_timer(&self, label: &str) -> Timer {
        self.monitor.read().await.start_timer(label)
    }

    async fn stop_timer(&self, timer: Timer) {
        let mut monitor = self.monitor.write().await;
        timer.stop(&mut monitor);
    }
}

/// Handler for PUT /cache
///
/// Stores a JSON value under a key.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let timer = state.start_timer("cache.set").await;
    state.cache.write().await.set(req.key.clone(), req.value);
    state.stop_timer(timer).await;

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /cache/:key
///
/// Returns the cached value, or 404 if the key is absent or expired.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    // Write lock: a read moves the key to most recent or removes it if expired
    let timer = state.start_timer("cache.get").await;
    let value = state.cache.write().await.get(&key);
    state.stop_timer(timer).await;

    match value {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => {
            debug!(key = %key, "Cache miss");
            Err(CacheError::NotFound(key))
        }
    }
}

/// Handler for GET /cache/:key/exists
pub async fn has_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<HasResponse> {
    let timer = state.start_timer("cache.has").await;
    let exists = state.cache.write().await.has(&key);
    state.stop_timer(timer).await;

    Json(HasResponse::new(key, exists))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let timer = state.start_timer("cache.clear").await;
    let removed = state.cache.write().await.clear();
    state.stop_timer(timer).await;

    debug!(removed, "Cache cleared");
    Json(ClearResponse::new(removed))
}

/// Handler for GET /search?q=
///
/// Looks up memoized results for a query. A miss is a normal 200 answer
/// with `hit: false`.
pub async fn search_get_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    if let Some(error_msg) = params.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let key = query_key(&params.q);
    let timer = state.start_timer("search.get").await;
    let value = state.cache.write().await.get(&key);
    state.stop_timer(timer).await;

    debug!(key = %key, hit = value.is_some(), "Search cache lookup");
    Ok(Json(SearchResponse::new(key, value)))
}

/// Handler for PUT /search
///
/// Memoizes freshly computed results for a query.
pub async fn search_set_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchStoreRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let key = query_key(&req.query);
    let timer = state.start_timer("search.set").await;
    state.cache.write().await.set(key.clone(), req.results);
    state.stop_timer(timer).await;

    Ok(Json(SetResponse::new(key)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        &stats,
        cache.max_size(),
        cache.ttl().as_millis() as u64,
    ))
}

/// Handler for GET /metrics
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    let monitor = state.monitor.read().await;
    Json(MetricsResponse::new(monitor.get_all_stats()))
}

/// Handler for DELETE /metrics
pub async fn clear_metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    let mut monitor = state.monitor.write().await;
    monitor.clear();
    Json(MetricsResponse::new(monitor.get_all_stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
