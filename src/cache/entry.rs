//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use serde_json::Value;

// == Cache Entry ==
/// A single cached payload with its creation instant and lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload (any JSON-shaped value a handler produced)
    pub data: Value,
    /// Creation instant (monotonic)
    pub stored_at: Instant,
    /// Lifetime measured from `stored_at`
    pub ttl: Duration,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry whose clock starts now.
    pub fn new(data: Value, ttl: Duration) -> Self {
        Self {
            data,
            stored_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is live while `stored_at.elapsed() <= ttl`; once the elapsed
    /// time exceeds the TTL it must no longer be served.
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, saturating at zero once expired.
    ///
    /// Diagnostic only; never used for the liveness decision itself.
    #[allow(dead_code)]
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.stored_at.elapsed())
    }
}
