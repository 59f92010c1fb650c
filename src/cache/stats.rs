//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, expirations,
//! and pattern invalidations.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries removed because their TTL elapsed
    pub expirations: u64,
    /// Number of entries removed by pattern invalidation
    pub invalidations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expirations ==
    /// Adds to the expiration counter.
    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    // == Record Invalidations ==
    /// Adds to the pattern-invalidation counter.
    pub fn record_invalidations(&mut self, count: usize) {
        self.invalidations += count as u64;
    }
}

// == Cache Snapshot ==
/// Point-in-time diagnostic view of the store.
///
/// `keys` reflects the underlying map at call time; its order is not
/// stable across calls once entries are removed and re-added.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSnapshot {
    /// Current number of entries
    pub size: usize,
    /// Keys currently present
    pub keys: Vec<String>,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of TTL expirations
    pub expirations: u64,
    /// Number of pattern invalidations
    pub invalidations: u64,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}
