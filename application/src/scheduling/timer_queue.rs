//! Deterministic virtual-time scheduler.
//!
//! [`TimerQueue`] keeps pending [`TimerTask`]s ordered by deadline. Time only
//! moves when the owner pops due tasks or settles the clock, which makes every
//! timing path reproducible in tests. The binary maps wall-clock time onto it.

use crate::ports::scheduler::{Scheduler, TimerHandle, TimerTask};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct QueueState {
    now: Duration,
    next_handle: u64,
    /// Keyed by (deadline, handle) so equal deadlines fire in scheduling order
    pending: BTreeMap<(Duration, u64), TimerTask>,
}

/// Virtual-time timer queue.
#[derive(Debug, Default)]
pub struct TimerQueue {
    state: Mutex<QueueState>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deadline of the earliest pending task
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state().pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Number of pending tasks
    pub fn pending(&self) -> usize {
        self.state().pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.state().pending.is_empty()
    }

    /// Remove and return the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's deadline, so anything the task schedules
    /// while being handled is measured from the moment it fired.
    pub fn pop_due(&self, until: Duration) -> Option<TimerTask> {
        let mut state = self.state();
        let (&key, _) = state.pending.iter().next()?;
        if key.0 > until {
            return None;
        }
        let task = state.pending.remove(&key)?;
        state.now = state.now.max(key.0);
        Some(task)
    }

    /// Move the clock forward to `until` without firing anything
    pub fn settle(&self, until: Duration) {
        let mut state = self.state();
        state.now = state.now.max(until);
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> Duration {
        self.state().now
    }

    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerHandle {
        let mut state = self.state();
        let handle = state.next_handle;
        state.next_handle += 1;
        let deadline = state.now + delay;
        state.pending.insert((deadline, handle), task);
        TimerHandle(handle)
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        let mut state = self.state();
        let key = state
            .pending
            .keys()
            .find(|(_, h)| *h == handle.0)
            .copied();
        match key {
            Some(key) => state.pending.remove(&key).is_some(),
            None => false,
        }
    }
}
