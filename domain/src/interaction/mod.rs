//! Interaction domain module: the input events the page reacts to.
//!
//! Every behavior of the interactivity layer is a synchronous reaction to one
//! [`UiEvent`]. Hosts translate their native input (DOM events, terminal
//! commands, test scripts) into these events and hand them to the site.
//!
//! | Event | Reaction |
//! |-------|----------|
//! | [`FieldFocused`](UiEvent::FieldFocused) / [`FieldBlurred`](UiEvent::FieldBlurred) | Focus visuals, stale error flag cleared on blur |
//! | [`FieldInput`](UiEvent::FieldInput) | Value update, error flag cleared |
//! | [`KeyPressed`](UiEvent::KeyPressed) | Enter in the last field submits, Escape closes the menu |
//! | [`SubmitClicked`](UiEvent::SubmitClicked) | Validation and simulated submission |
//! | [`MenuButtonClicked`](UiEvent::MenuButtonClicked) | Toggle the mobile menu |
//! | [`OverlayClicked`](UiEvent::OverlayClicked) / [`NavLinkClicked`](UiEvent::NavLinkClicked) | Close the menu |
//! | [`AnchorClicked`](UiEvent::AnchorClicked) | Smooth scroll to a section |
//! | [`Scrolled`](UiEvent::Scrolled) | Highlight the nav link of the visible section |
//! | [`TileEntered`](UiEvent::TileEntered) / [`TileLeft`](UiEvent::TileLeft) / [`TileClicked`](UiEvent::TileClicked) | Hover and press visuals |
//!
//! # Examples
//!
//! ```
//! use folio_domain::interaction::{Key, UiEvent};
//! use folio_domain::FieldId;
//!
//! let event = UiEvent::KeyPressed { field: Some(FieldId(2)), key: Key::Enter };
//! assert!(event.is_form_event());
//! assert!(!UiEvent::MenuButtonClicked.is_form_event());
//! ```

use crate::contact::field::FieldId;
use crate::page::tiles::TileId;
use std::fmt;

/// Keys the interaction layer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Enter => write!(f, "Enter"),
            Key::Escape => write!(f, "Escape"),
            Key::Other => write!(f, "other"),
        }
    }
}

/// A user interface event.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    FieldFocused(FieldId),
    FieldBlurred(FieldId),
    FieldInput { field: FieldId, value: String },
    /// A key press, with the focused field if any
    KeyPressed { field: Option<FieldId>, key: Key },
    SubmitClicked,
    MenuButtonClicked,
    OverlayClicked,
    /// A link inside the navigation list
    NavLinkClicked { href: String },
    /// Any in-page anchor outside the navigation list
    AnchorClicked { href: String },
    Scrolled { y: f64 },
    TileEntered(TileId),
    TileLeft(TileId),
    TileClicked(TileId),
}

impl UiEvent {
    /// True when the contact form controller handles the event.
    ///
    /// Key presses count as form events; the site also routes Escape to the
    /// page controller.
    pub fn is_form_event(&self) -> bool {
        matches!(
            self,
            UiEvent::FieldFocused(_)
                | UiEvent::FieldBlurred(_)
                | UiEvent::FieldInput { .. }
                | UiEvent::KeyPressed { .. }
                | UiEvent::SubmitClicked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_form_event() {
        assert!(UiEvent::SubmitClicked.is_form_event());
        assert!(UiEvent::FieldFocused(FieldId(0)).is_form_event());
        assert!(
            UiEvent::FieldInput {
                field: FieldId(1),
                value: "x".to_string()
            }
            .is_form_event()
        );
        assert!(!UiEvent::Scrolled { y: 10.0 }.is_form_event());
        assert!(!UiEvent::TileClicked(TileId::skill(0)).is_form_event());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Enter.to_string(), "Enter");
        assert_eq!(Key::Escape.to_string(), "Escape");
    }
}
