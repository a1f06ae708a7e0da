//! Wall-clock driver for the virtual-time scheduler.
//!
//! The application layer keeps time as a [`Duration`] since the page was
//! mounted. [`WallClock`] anchors that offset to a tokio [`Instant`] so the
//! interactive session can sleep until the next timer deadline.

use std::time::Duration;
use tokio::time::Instant;

/// Maps virtual page time onto tokio's clock.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    /// Start the clock; virtual time zero is now
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Virtual time elapsed since [`start`](Self::start)
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Instant at which the virtual clock reads `at`
    pub fn instant_at(&self, at: Duration) -> Instant {
        self.origin + at
    }

    /// Sleep until the virtual clock reaches `deadline`.
    ///
    /// With no deadline this never completes, so it can sit in a
    /// `tokio::select!` branch unconditionally.
    pub async fn sleep_until(&self, deadline: Option<Duration>) {
        match deadline {
            Some(at) => tokio::time::sleep_until(self.instant_at(at)).await,
            None => std::future::pending::<()>().await,
        }
    }
}
