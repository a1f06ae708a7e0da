//! Transient feedback shown to the visitor: inline field errors and
//! page-level notifications, plus the timings that govern their lifetime.

pub mod notification;
pub mod timing;
