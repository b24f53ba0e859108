//! Periodic background compaction of expired entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::ttl::TtlMap;

/// Handle to a background sweep task.
///
/// The task wakes on a fixed interval and removes expired entries from
/// its map. Dropping the handle does not stop the task; call
/// [`Sweeper::shutdown`] at process teardown.
#[derive(Debug)]
pub struct Sweeper {
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Spawns a sweep task over `map`, waking every `interval`.
    pub fn spawn<V: Clone + Send + Sync + 'static>(map: TtlMap<V>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; consume it so a full
            // interval elapses before the first sweep.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = map.sweep();
                if removed > 0 {
                    debug!(removed, "Sweep cycle completed");
                }
            }
        });

        Self { handle }
    }

    /// Stops the sweep task.
    pub fn shutdown(self) {
        self.handle.abort();
        info!("Sweeper stopped");
    }
}
