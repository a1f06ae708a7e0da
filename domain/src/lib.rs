//! Domain layer for folio
//!
//! This crate contains the entities, value objects and pure rules of the
//! portfolio page's interactivity layer. It has no dependencies on
//! rendering, timers or configuration files.
//!
//! # Core Concepts
//!
//! ## Contact form
//!
//! - **Field**: one input with a semantic role (name, email, message)
//! - **Validation**: required check on every field, then a shallow email
//!   shape check
//! - **Submission status**: Idle → Submitting → Succeeded → Idle
//!
//! ## Feedback
//!
//! - **FieldError**: inline message under one field, dismissed after a delay
//! - **Notification**: page-level message, at most one at a time
//!
//! ## Page
//!
//! Mobile menu, anchor scrolling, scroll spy and tile press visuals.

pub mod config;
pub mod contact;
pub mod core;
pub mod feedback;
pub mod interaction;
pub mod page;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, IssueSeverity};
pub use contact::{
    copy::FormCopy,
    field::{Field, FieldId, FieldRole, InputKind},
    form::{ContactForm, FieldIssue, IssueKind, ValidationReport},
    submission::SubmissionStatus,
    validators::{is_required, is_valid_email},
};
pub use core::error::DomainError;
pub use feedback::{
    notification::{Animation, FieldError, FieldErrorId, Notification, NotificationId, Severity},
    timing::InteractionTimings,
};
pub use interaction::{Key, UiEvent};
pub use page::{
    menu::MenuState,
    navigation::{AnchorTarget, NavigationLayout, PageOutline, Section},
    tiles::{TileId, TileKind, TileState, TileVisual, Tint},
};
