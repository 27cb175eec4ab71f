//! Periodic whole-store expiry.

use super::store::ResponseStore;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

/// Background task clearing a [`ResponseStore`] every `ttl`.
///
/// The task holds only a weak reference to the store and is aborted when the
/// handle is dropped.
pub struct Sweeper {
    ttl: Duration,
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Must be called from within a tokio runtime. `ttl` must be non-zero.
    ///
    /// Returns `None` when `ttl` is too large to schedule on the runtime clock.
    pub(crate) fn spawn(store: &Arc<ResponseStore>, ttl: Duration) -> Option<Self> {
        let start = Instant::now().checked_add(ttl)?;
        // Delay ticks reschedule one period after the previous one.
        start.checked_add(ttl)?;

        let store: Weak<ResponseStore> = Arc::downgrade(store);
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(start, ttl);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(store) = store.upgrade() else {
                    break;
                };
                let cleared = store.clear();
                info!(cleared, "Clearing cache...");
            }
        });
        Some(Self { ttl, handle })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
