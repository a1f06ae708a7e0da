//! Fixed delays of the interaction layer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays, in milliseconds, used by feedback and the submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionTimings {
    /// How long a field error stays before its exit animation
    pub field_error_ms: u64,
    /// How long a notification stays before its exit animation
    pub notification_ms: u64,
    /// Length of every exit animation; removal follows it
    pub exit_animation_ms: u64,
    /// Simulated send time
    pub submit_delay_ms: u64,
    /// Time the "sent" state is shown before the control resets
    pub reset_delay_ms: u64,
    /// Time a pressed tile or button keeps its pressed visual
    pub press_release_ms: u64,
}

impl Default for InteractionTimings {
    fn default() -> Self {
        Self {
            field_error_ms: 3000,
            notification_ms: 4000,
            exit_animation_ms: 300,
            submit_delay_ms: 1500,
            reset_delay_ms: 2000,
            press_release_ms: 200,
        }
    }
}

impl InteractionTimings {
    pub fn field_error(&self) -> Duration {
        Duration::from_millis(self.field_error_ms)
    }

    pub fn notification(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(self.exit_animation_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn press_release(&self) -> Duration {
        Duration::from_millis(self.press_release_ms)
    }
}
