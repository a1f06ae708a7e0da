//! User-visible text of the contact form.

use super::form::IssueKind;
use serde::{Deserialize, Serialize};

/// Every string the contact form shows to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormCopy {
    /// Field error for an empty field
    pub required: String,
    /// Field error for a malformed email address
    pub invalid_email: String,
    /// Error notification when validation fails
    pub rejected: String,
    /// Success notification after the simulated send
    pub sent: String,
    /// Submit control label while idle
    pub label_idle: String,
    /// Submit control label while submitting
    pub label_sending: String,
    /// Submit control label after success
    pub label_sent: String,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            invalid_email: "Please enter a valid email address".to_string(),
            rejected: "Please fill in all fields correctly".to_string(),
            sent: "Message sent successfully! I will get back to you soon.".to_string(),
            label_idle: "Send message".to_string(),
            label_sending: "Sending...".to_string(),
            label_sent: "Message Sent!".to_string(),
        }
    }
}

impl FormCopy {
    /// Field error text for a validation issue
    pub fn issue_message(&self, kind: IssueKind) -> &str {
        match kind {
            IssueKind::Required => &self.required,
            IssueKind::InvalidEmail => &self.invalid_email,
        }
    }
}
