//! Contact form fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of an input in the form, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldId(pub usize);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Markup type of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    TextArea,
}

impl std::str::FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(InputKind::Text),
            "email" => Ok(InputKind::Email),
            "textarea" => Ok(InputKind::TextArea),
            _ => Err(format!("Invalid InputKind: {}", s)),
        }
    }
}

/// Semantic role of a field.
///
/// An email-typed input is always `Email`; otherwise the first input is
/// `Name` and every other input is `Message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    Name,
    Email,
    Message,
}

impl FieldRole {
    /// Derive the role for an input at `position`
    pub fn assign(kind: InputKind, position: usize) -> Self {
        match (kind, position) {
            (InputKind::Email, _) => FieldRole::Email,
            (_, 0) => FieldRole::Name,
            _ => FieldRole::Message,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRole::Name => "name",
            FieldRole::Email => "email",
            FieldRole::Message => "message",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input of the contact form.
///
/// Validity is never stored: it is recomputed by
/// [`ContactForm::validate`](super::form::ContactForm::validate). `invalid`
/// is only the visual error flag set by the last validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub kind: InputKind,
    pub role: FieldRole,
    pub value: String,
    pub focused: bool,
    pub invalid: bool,
}

impl Field {
    pub fn new(id: FieldId, kind: InputKind) -> Self {
        Self {
            id,
            kind,
            role: FieldRole::assign(kind, id.0),
            value: String::new(),
            focused: false,
            invalid: false,
        }
    }

    /// Value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_assignment() {
        assert_eq!(FieldRole::assign(InputKind::Text, 0), FieldRole::Name);
        assert_eq!(FieldRole::assign(InputKind::Email, 1), FieldRole::Email);
        assert_eq!(FieldRole::assign(InputKind::Text, 2), FieldRole::Message);
        assert_eq!(FieldRole::assign(InputKind::TextArea, 5), FieldRole::Message);
    }

    #[test]
    fn test_email_role_wins_over_position() {
        assert_eq!(FieldRole::assign(InputKind::Email, 0), FieldRole::Email);
    }

    #[test]
    fn test_input_kind_from_str() {
        assert_eq!("email".parse::<InputKind>().ok(), Some(InputKind::Email));
        assert_eq!("TEXT".parse::<InputKind>().ok(), Some(InputKind::Text));
        assert_eq!(
            "textarea".parse::<InputKind>().ok(),
            Some(InputKind::TextArea)
        );
        assert!("checkbox".parse::<InputKind>().is_err());
    }

    #[test]
    fn test_new_field_is_clean() {
        let field = Field::new(FieldId(1), InputKind::Email);
        assert_eq!(field.role, FieldRole::Email);
        assert!(field.value.is_empty());
        assert!(!field.focused);
        assert!(!field.invalid);
        assert!(field.is_blank());
    }
}
