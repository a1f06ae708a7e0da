//! Notification and field error value objects

use crate::contact::field::FieldId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Error,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "error" => Ok(Severity::Error),
            "success" => Ok(Severity::Success),
            _ => Err(format!("Invalid Severity: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldErrorId(pub u64);

/// Page-level message. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// Virtual time at creation; only used to schedule dismissal
    pub created_at: Duration,
}

/// Inline message attached to exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub id: FieldErrorId,
    pub field: FieldId,
    pub message: String,
}

/// Entrance and exit animations played by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    /// Field error entrance
    FadeIn,
    /// Field error exit
    FadeOut,
    /// Notification entrance
    SlideIn,
    /// Notification exit
    SlideOut,
}

impl Animation {
    pub fn is_exit(&self) -> bool {
        matches!(self, Animation::FadeOut | Animation::SlideOut)
    }
}
