//! Configuration Module
//!
//! Handles loading server configuration from environment variables. Values
//! are read once at process start; in particular the cache TTL is fixed for
//! the process lifetime and changing it requires a restart.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds applied to every cache entry
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache entry TTL in seconds (default: 3600)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    pub fn from_env() -> Self {
        Self {
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
        }
    }

    /// The cache TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 3600,
            server_port: 5000,
        }
    }
}
