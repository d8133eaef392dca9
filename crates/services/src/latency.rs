//! Simulated network latency.
//!
//! The real product has no backend; every service sleeps briefly so the
//! surrounding code exercises the same async paths it would against a
//! network. Tests use [`Latency::none`].

use std::time::Duration;
use tokio::time::sleep;

/// Per-operation artificial delay profile.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    pub read: Duration,
    pub write: Duration,
}

impl Latency {
    /// The delays the simulated backend has always used: 300 ms reads,
    /// 400 ms writes.
    pub fn simulated() -> Self {
        Self {
            read: Duration::from_millis(300),
            write: Duration::from_millis(400),
        }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self {
            read: Duration::ZERO,
            write: Duration::ZERO,
        }
    }

    pub(crate) async fn read_delay(&self) {
        if !self.read.is_zero() {
            sleep(self.read).await;
        }
    }

    pub(crate) async fn write_delay(&self) {
        if !self.write.is_zero() {
            sleep(self.write).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}
