//! Scheduler implementations owned by the application layer.

mod timer_queue;

pub use timer_queue::TimerQueue;
