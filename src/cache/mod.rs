//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and pattern invalidation.

use std::sync::Arc;

use tokio::sync::RwLock;

mod entry;
mod keys;
mod pattern;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use keys::Resource;
pub use pattern::KeyPattern;
pub use stats::{CacheSnapshot, CacheStats};
pub use store::CacheStore;

/// Shared handle to the process-wide store.
///
/// Constructed once at startup and handed to every middleware and handler
/// that needs it; tests build their own instance to stay isolated.
pub type SharedCache = Arc<RwLock<CacheStore>>;

// == Public Constants ==
/// Largest response body the middleware will capture into the cache
pub const MAX_CACHEABLE_BODY_BYTES: usize = 1024 * 1024; // 1 MB
