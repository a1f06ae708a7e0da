//! Structured configuration issues.
//!
//! Configuration loading never panics on bad values. Instead each problem is
//! reported as a [`ConfigIssue`] and the caller decides: errors abort
//! startup, warnings are printed and the default is used.
//!
//! # Examples
//!
//! ```
//! use folio_domain::config::{ConfigIssue, ConfigIssueCode, IssueSeverity};
//!
//! let issue = ConfigIssue::error(
//!     ConfigIssueCode::ZeroDuration { field: "timings.notification_ms".to_string() },
//!     "timings.notification_ms must be greater than zero",
//! );
//! assert!(issue.is_error());
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// An enum-like string field has an unrecognized value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A lifetime or delay is zero, which would make feedback invisible.
    ZeroDuration { field: String },
    /// The form inputs cannot host a contact form.
    InvalidFormLayout { reason: String },
    /// A section is malformed or duplicated.
    InvalidSection { id: String, reason: String },
    /// A nav link points at no known section.
    DanglingLink { href: String },
    /// A user-visible string is empty.
    EmptyCopy { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: IssueSeverity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}
