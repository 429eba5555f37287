//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{DEFAULT_MAX_SIZE, DEFAULT_TTL_MS};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// Entry lifetime in milliseconds
    pub ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Expired-entry sweep interval in milliseconds, 0 disables the sweep
    pub sweep_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 50)
    /// - `CACHE_TTL_MS` - Entry lifetime in milliseconds (default: 300000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL_MS` - Background sweep interval (default: 0, disabled)
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_size: env_or("CACHE_MAX_SIZE", defaults.max_size),
            ttl_ms: env_or("CACHE_TTL_MS", defaults.ttl_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval_ms: env_or("SWEEP_INTERVAL_MS", defaults.sweep_interval_ms),
        }
    }

    /// Whether the background sweep should run.
    pub fn sweep_enabled(&self) -> bool {
        self.sweep_interval_ms > 0
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            ttl_ms: DEFAULT_TTL_MS,
            server_port: 3000,
            sweep_interval_ms: 0,
        }
    }
}
