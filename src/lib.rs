//! Search Cache - bounded result memoization for search features
//!
//! Provides a generic LRU cache with lazy TTL expiry, a per-label
//! operation timing monitor, and an HTTP service that owns one of each.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{query_key, LruCache};
pub use config::Config;
pub use metrics::PerformanceMonitor;
pub use tasks::spawn_sweep_task;
