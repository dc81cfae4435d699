//! Cooperative cooldown after 429 responses.
//!
//! A 429 engages the throttle and the failing call returns at once. A
//! background timer clears the flag when the cooldown elapses. Until then
//! every call on the same client is refused by a pre-flight check without
//! touching the network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared throttled flag plus the cooldown it is held for.
#[derive(Clone, Debug)]
pub struct Throttle {
    throttled: Arc<AtomicBool>,
    cooldown: Duration,
}

impl Throttle {
    /// Creates a disengaged throttle with the given cooldown.
    #[must_use]
    pub fn new(cooldown: Duration) -> Self {
        Self {
            throttled: Arc::new(AtomicBool::new(false)),
            cooldown,
        }
    }

    /// Returns the cooldown window.
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Returns `true` while the cooldown is running.
    #[must_use]
    pub fn is_throttled(&self) -> bool {
        self.throttled.load(Ordering::Acquire)
    }

    /// Engages the throttle and schedules its release.
    ///
    /// Concurrent 429s share one timer: only the call that flips the flag
    /// spawns it. Must be called from within a Tokio runtime.
    pub fn engage(&self) {
        if self.throttled.swap(true, Ordering::AcqRel) {
            return;
        }

        tracing::warn!(
            "QuickBooks rate limit hit; refusing requests for {:?}",
            self.cooldown
        );

        let flag = Arc::clone(&self.throttled);
        let cooldown = self.cooldown;
        tokio::spawn(async move {
            tokio::time::sleep(cooldown).await;
            flag.store(false, Ordering::Release);
            tracing::debug!("QuickBooks throttle cooldown elapsed");
        });
    }
}
