//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Per-resource cache lifetimes.
///
/// Different reads tolerate different staleness: full listings change
/// rarely, search results churn with the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CacheTtls {
    /// Full listing reads (e.g. all products)
    pub listing: Duration,
    /// Single-record reads
    pub single: Duration,
    /// Search reads
    pub search: Duration,
    /// By-category listing reads
    pub category: Duration,
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL applied to cache entries stored without an explicit one
    pub default_ttl: Duration,
    /// Interval between background sweep runs
    pub cleanup_interval: Duration,
    /// Per-route cache lifetimes
    pub ttls: CacheTtls,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_TTL` - Default entry TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 300)
    /// - `TTL_LISTING` - Listing TTL in seconds (default: 600)
    /// - `TTL_SINGLE` - Single-record TTL in seconds (default: 300)
    /// - `TTL_SEARCH` - Search TTL in seconds (default: 120)
    /// - `TTL_CATEGORY` - By-category TTL in seconds (default: 600)
    pub fn from_env() -> Self {
        Self {
            server_port: env_or("SERVER_PORT", 3000),
            default_ttl: Duration::from_secs(env_or("DEFAULT_TTL", 300)),
            cleanup_interval: Duration::from_secs(env_or("CLEANUP_INTERVAL", 300)),
            ttls: CacheTtls {
                listing: Duration::from_secs(env_or("TTL_LISTING", 600)),
                single: Duration::from_secs(env_or("TTL_SINGLE", 300)),
                search: Duration::from_secs(env_or("TTL_SEARCH", 120)),
                category: Duration::from_secs(env_or("TTL_CATEGORY", 600)),
            },
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl: Duration::from_secs(300),
            cleanup_interval: Duration::from_secs(300),
            ttls: CacheTtls {
                listing: Duration::from_secs(600),
                single: Duration::from_secs(300),
                search: Duration::from_secs(120),
                category: Duration::from_secs(600),
            },
        }
    }
}
