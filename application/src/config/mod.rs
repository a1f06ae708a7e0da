//! Application-level configuration.
//!
//! [`InteractionConfig`] gathers everything the controllers need at
//! construction: timings, user-visible copy and the page's layout.

pub mod interaction;

pub use interaction::InteractionConfig;
