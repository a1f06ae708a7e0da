//! Rendering surface ports
//!
//! The controllers never touch presentation state directly. They describe
//! what should be visible through these traits, and an adapter (browser DOM,
//! terminal, test recorder) decides how it looks.
//!
//! The three traits are split by owner:
//!
//! - [`FeedbackSurface`]: transient field errors and notifications
//! - [`FormSurface`]: field visuals and the submit control
//! - [`PageSurface`]: mobile menu, scrolling, nav highlight and tiles

use folio_domain::{Animation, Field, FieldError, Notification, TileId, TileVisual};

/// Visual style of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStyle {
    #[default]
    Normal,
    /// Pressed-in look while the message is being sent
    Pressed,
    /// Success coloring after the message was sent
    Success,
}

/// Full state of the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
    pub style: SubmitStyle,
}

impl SubmitControl {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            enabled: true,
            label: label.into(),
            style: SubmitStyle::Normal,
        }
    }
}

/// Surface that hosts inline field errors and the page-level notification.
pub trait FeedbackSurface: Send + Sync {
    /// Insert an error below its field
    fn attach_field_error(&self, error: &FieldError);

    /// Play an entrance or exit animation on a field error
    fn animate_field_error(&self, error: &FieldError, animation: Animation);

    /// Remove a field error
    fn detach_field_error(&self, error: &FieldError);

    /// Insert a notification into the page container
    fn attach_notification(&self, notification: &Notification);

    /// Play an entrance or exit animation on a notification
    fn animate_notification(&self, notification: &Notification, animation: Animation);

    /// Remove a notification
    fn detach_notification(&self, notification: &Notification);
}

/// Surface that shows form fields and the submit control.
pub trait FormSurface: Send + Sync {
    /// Redraw a field from its current value, focus and error flag
    fn render_field(&self, field: &Field);

    /// Redraw the submit control
    fn render_submit(&self, control: &SubmitControl);
}

/// Surface for the page bindings outside the form.
pub trait PageSurface: Send + Sync {
    /// Show or hide the mobile menu and its overlay
    fn render_menu(&self, open: bool, scroll_locked: bool);

    /// Smoothly scroll the window to a vertical offset
    fn scroll_to(&self, offset: f64);

    /// Mark one nav link active and clear the others; `None` clears every link
    fn highlight_link(&self, href: Option<&str>);

    /// Redraw a skill tile or project button
    fn render_tile(&self, tile: TileId, visual: &TileVisual);
}
