//! Domain error types

use crate::contact::field::FieldId;
use crate::contact::submission::SubmissionStatus;
use crate::page::tiles::TileId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Contact form has no input fields")]
    EmptyForm,

    #[error("Contact form has no email-typed input field")]
    MissingEmailField,

    #[error("Contact form has more than one email-typed input field ({first} and {second})")]
    DuplicateEmailField { first: FieldId, second: FieldId },

    #[error("Unknown field: {0}")]
    UnknownField(FieldId),

    #[error("Unknown tile: {0}")]
    UnknownTile(TileId),

    #[error("Invalid submission transition: cannot {trigger} while {from}")]
    InvalidTransition {
        from: SubmissionStatus,
        trigger: &'static str,
    },

    #[error("Invalid section '{id}': {reason}")]
    InvalidSection { id: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_email_display() {
        let error = DomainError::MissingEmailField;
        assert_eq!(
            error.to_string(),
            "Contact form has no email-typed input field"
        );
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            from: SubmissionStatus::Submitting,
            trigger: "begin",
        };
        assert_eq!(
            error.to_string(),
            "Invalid submission transition: cannot begin while submitting"
        );
    }

    #[test]
    fn test_invalid_section_display() {
        let error = DomainError::InvalidSection {
            id: "about".to_string(),
            reason: "negative height".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid section 'about': negative height");
    }
}
