//! Contact form model.
//!
//! The form is an ordered list of inputs. Each input gets a semantic
//! [`FieldRole`](field::FieldRole) from its kind and position, and the form
//! validates itself into a [`ValidationReport`](form::ValidationReport)
//! without touching any presentation state.

pub mod copy;
pub mod field;
pub mod form;
pub mod submission;
pub mod validators;
