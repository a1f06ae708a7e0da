//! Use cases (application services)
//!
//! - [`feedback`]: field errors and notifications
//! - [`contact_form`]: validation and the submission state machine
//! - [`page`]: menu, navigation and tile bindings
//! - [`site`]: event and timer routing across the controllers

pub mod contact_form;
pub mod feedback;
pub mod page;
pub mod site;
