//! Port for structured interaction logging.
//!
//! Defines the [`InteractionLogger`] trait for recording what the visitor did
//! with the contact form (rejected attempts, started and completed sends)
//! in a machine-readable form.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a record that can be
//! replayed or analyzed later (JSONL).

use folio_domain::FieldIssue;
use serde::Serialize;

/// A structured interaction record.
///
/// Serializes as a flat object tagged by `type`, e.g.
/// `{"type":"submission_started","fields":3}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionRecord {
    /// Validation passed and the send began
    SubmissionStarted { fields: usize },
    /// Validation failed on at least one field
    SubmissionRejected { issues: Vec<FieldIssue> },
    /// The send settled; `at_ms` is virtual time since start
    SubmissionSucceeded { at_ms: u64 },
}

impl InteractionRecord {
    /// Record type identifier, matching the serialized `type` tag
    pub fn record_type(&self) -> &'static str {
        match self {
            Self::SubmissionStarted { .. } => "submission_started",
            Self::SubmissionRejected { .. } => "submission_rejected",
            Self::SubmissionSucceeded { .. } => "submission_succeeded",
        }
    }
}

/// Port for logging interaction records.
///
/// The `log` method is synchronous and non-fallible so logging problems
/// never interrupt the visitor's interaction.
pub trait InteractionLogger: Send + Sync {
    fn log(&self, record: InteractionRecord);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInteractionLog;

impl InteractionLogger for NoInteractionLog {
    fn log(&self, _record: InteractionRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{FieldId, FieldRole, IssueKind};

    #[test]
    fn test_record_serializes_flat_with_type_tag() {
        let record = InteractionRecord::SubmissionRejected {
            issues: vec![FieldIssue {
                field: FieldId(1),
                role: FieldRole::Email,
                kind: IssueKind::InvalidEmail,
            }],
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], record.record_type());
        assert_eq!(value["issues"][0]["field"], 1);
        assert_eq!(value["issues"][0]["role"], "email");
        assert_eq!(value["issues"][0]["kind"], "invalid_email");
    }

    #[test]
    fn test_type_tag_matches_record_type() {
        for record in [
            InteractionRecord::SubmissionStarted { fields: 3 },
            InteractionRecord::SubmissionSucceeded { at_ms: 1500 },
        ] {
            let value = serde_json::to_value(&record).unwrap();
            assert_eq!(value["type"], record.record_type());
        }
    }
}
