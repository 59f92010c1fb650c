//! Cache Store Module
//!
//! Main cache engine: HashMap storage with per-entry TTL, lazy eviction on
//! read, and bulk invalidation by key pattern.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheSnapshot, CacheStats, KeyPattern};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// In-memory key/value store with TTL expiration and pattern invalidation.
///
/// The store exclusively owns its entries; callers interact only through
/// key/value semantics. A miss is an ordinary outcome, never an error —
/// errors are reserved for invalid input to `set`.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance counters
    stats: CacheStats,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL applied to entries stored without an explicit one
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a payload under a key with an optional TTL.
    ///
    /// Overwriting an existing key replaces its payload and resets its
    /// clock. Rejects empty keys and zero TTLs rather than storing an
    /// entry that could never be looked up or never be served.
    ///
    /// # Arguments
    /// * `key` - Non-empty cache key
    /// * `data` - The payload to store
    /// * `ttl` - Optional TTL (uses the store default if None)
    pub fn set(&mut self, key: impl Into<String>, data: Value, ttl: Option<Duration>) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(CacheError::InvalidKey(
                "Cache key cannot be empty".to_string(),
            ));
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl(
                "Cache TTL must be greater than zero".to_string(),
            ));
        }

        debug!(key = %key, ttl_secs = ttl.as_secs_f64(), "cache set");
        self.entries.insert(key, CacheEntry::new(data, ttl));

        Ok(())
    }

    // == Get ==
    /// Retrieves a payload by key.
    ///
    /// Returns the payload if the entry exists and is live. An expired
    /// entry is removed as a side effect and reported as a miss, exactly
    /// like an absent key.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                debug!(key = %key, "cache expired");
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                debug!(key = %key, "cache hit");
                Some(entry.data.clone())
            }
            None => {
                self.stats.record_miss();
                debug!(key = %key, "cache miss");
                None
            }
        }
    }

    // == Delete ==
    /// Removes a single key, reporting whether a removal occurred.
    ///
    /// A no-op on an absent key.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key = %key, "cache delete");
        }
        removed
    }

    // == Delete Pattern ==
    /// Removes every key matching the pattern, returning the count removed.
    ///
    /// The pattern may contain one `*` wildcard; matching is anchored over
    /// the whole key. Safe to call with zero matches.
    pub fn delete_pattern(&mut self, pattern: &str) -> usize {
        let matcher = KeyPattern::parse(pattern);
        let matched: Vec<String> = self
            .entries
            .keys()
            .filter(|key| matcher.matches(key))
            .cloned()
            .collect();

        let count = matched.len();
        for key in matched {
            self.entries.remove(&key);
        }

        if count > 0 {
            self.stats.record_invalidations(count);
            debug!(pattern = %pattern, count, "cache pattern invalidation");
        }

        count
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        let size = self.entries.len();
        self.entries.clear();
        debug!(removed = size, "cache cleared");
    }

    // == Stats ==
    /// Returns a diagnostic snapshot of the store.
    pub fn stats(&self) -> CacheSnapshot {
        CacheSnapshot {
            size: self.entries.len(),
            keys: self.entries.keys().cloned().collect(),
            hits: self.stats.hits,
            misses: self.stats.misses,
            expirations: self.stats.expirations,
            invalidations: self.stats.invalidations,
            hit_rate: self.stats.hit_rate(),
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// This is the sweep body: it bounds memory growth from keys that are
    /// set but never read again (and so never hit lazy eviction). Returns
    /// the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired.len();
        for key in expired {
            self.entries.remove(&key);
        }

        self.stats.record_expirations(count);
        count
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
