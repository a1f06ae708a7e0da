//! Page-level behaviors outside the contact form.
//!
//! - [`menu`]: mobile navigation menu open/closed state
//! - [`navigation`]: section geometry, anchor targets and scroll spy
//! - [`tiles`]: hover and press visuals of skill tiles and project buttons

pub mod menu;
pub mod navigation;
pub mod tiles;
