//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Reads never return expired entries whether or not this task runs; it only
//! bounds how long stale entries keep counting toward `size()`.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::LruCache;

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// Each pass holds the write lock for the whole sweep, so it never
/// interleaves with a `get` or `set`.
///
/// # Returns
/// A JoinHandle for the spawned task, to be aborted on shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(LruCache::<String>::with_defaults()));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(30));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<T>(cache: Arc<RwLock<LruCache<T>>>, interval: Duration) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting expiry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_cache(ttl_ms: u64) -> Arc<RwLock<LruCache<String>>> {
        Arc::new(RwLock::new(LruCache::new(100, ttl_ms).unwrap()))
    }

    #[tokio::test]
    async fn test_sweep_removes_expired_entries() {
        let cache = shared_cache(100);
        cache.write().await.set("expire_soon", "value".to_string());

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(400)).await;

        // Removed without any read touching it
        {
            let cache_guard = cache.read().await;
            assert_eq!(cache_guard.size(), 0);
            assert_eq!(cache_guard.stats().expirations, 1);
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_preserves_fresh_entries() {
        let cache = shared_cache(60_000);
        cache.write().await.set("long_lived", "value".to_string());

        let handle = spawn_sweep_task(cache.clone(), Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(200)).await;

        {
            let mut cache_guard = cache.write().await;
            assert_eq!(cache_guard.get("long_lived"), Some("value".to_string()));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_can_be_aborted() {
        let cache = shared_cache(60_000);

        let handle = spawn_sweep_task(cache, Duration::from_secs(1));
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
