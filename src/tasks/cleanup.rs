//! TTL Cleanup Task
//!
//! Background sweep that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Handle to a running cleanup task.
///
/// Owns the task for its whole lifetime; dropping the handle does not stop
/// the sweep, only [`CleanupTask::stop`] does.
#[derive(Debug)]
pub struct CleanupTask {
    handle: JoinHandle<()>,
}

impl CleanupTask {
    /// Stops future sweep runs.
    ///
    /// Idempotent: stopping an already-stopped task is a no-op. A pass that
    /// has already taken the write lock finishes normally, so the entry map
    /// is never left half-swept.
    pub fn stop(&self) {
        self.handle.abort();
        info!("Cache cleanup task stopped");
    }

    /// Whether the task has fully terminated.
    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns the background sweep.
///
/// The task sleeps for `interval` between runs, then takes the write lock
/// and evicts every expired entry in one pass. This bounds memory growth
/// from keys that are set but never read again, which lazy eviction on
/// `get` cannot reach.
///
/// # Arguments
/// * `cache` - Shared cache store
/// * `interval` - Time between sweep runs
pub fn spawn_cleanup_task(cache: SharedCache, interval: Duration) -> CleanupTask {
    let handle = tokio::spawn(async move {
        info!(
            "Starting cache cleanup task with interval of {:?}",
            interval
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Cache cleanup: removed {} expired entries", removed);
            } else {
                debug!("Cache cleanup: no expired entries found");
            }
        }
    });

    CleanupTask { handle }
}
