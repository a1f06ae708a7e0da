//! Scheduler port
//!
//! Every deferred effect of the interaction layer is a [`TimerTask`] handed to
//! a [`Scheduler`]. Tasks are plain data: when one comes due, the host passes
//! it back to the site, which routes it to the owning controller. Nothing
//! runs inside the scheduler itself, so tests can drive time by hand.

use folio_domain::{FieldErrorId, FieldId, NotificationId, TileId};
use std::time::Duration;

/// Identifies a scheduled task for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Deferred effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Start the exit animation of a field error
    FieldErrorExit { field: FieldId, error: FieldErrorId },
    /// Remove a field error after its exit animation
    FieldErrorRemove { field: FieldId, error: FieldErrorId },
    /// Start the exit animation of a notification
    NotificationExit(NotificationId),
    /// Remove a notification after its exit animation
    NotificationRemove(NotificationId),
    /// The simulated send finished
    SubmissionSettled,
    /// Restore the submit control after the success state
    SubmitControlReset,
    /// Restore a tile's visual after a press
    TileRelease(TileId),
}

impl TimerTask {
    /// True for tasks owned by the contact form (including its feedback)
    pub fn is_form_task(&self) -> bool {
        !matches!(self, TimerTask::TileRelease(_))
    }
}

/// Source of virtual time and fixed-delay timers.
///
/// Timers are one-shot. A cancelled timer never comes due.
pub trait Scheduler: Send + Sync {
    /// Current virtual time since the page was loaded
    fn now(&self) -> Duration;

    /// Schedule `task` to come due after `delay`
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerHandle;

    /// Cancel a pending timer; returns false if it already fired or was unknown
    fn cancel(&self, handle: TimerHandle) -> bool;
}
