//! Submission lifecycle of the contact form.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of the "send" action.
///
/// Only `Idle → Submitting → Succeeded → Idle` is legal. There is no failed
/// state: a form that does not validate never leaves `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl SubmissionStatus {
    /// Idle → Submitting, after a clean validation pass
    pub fn begin(self) -> Result<Self, DomainError> {
        match self {
            SubmissionStatus::Idle => Ok(SubmissionStatus::Submitting),
            from => Err(DomainError::InvalidTransition {
                from,
                trigger: "begin",
            }),
        }
    }

    /// Submitting → Succeeded, once the simulated send completes
    pub fn settle(self) -> Result<Self, DomainError> {
        match self {
            SubmissionStatus::Submitting => Ok(SubmissionStatus::Succeeded),
            from => Err(DomainError::InvalidTransition {
                from,
                trigger: "settle",
            }),
        }
    }

    /// Succeeded → Idle, after the post-success delay
    pub fn reset(self) -> Result<Self, DomainError> {
        match self {
            SubmissionStatus::Succeeded => Ok(SubmissionStatus::Idle),
            from => Err(DomainError::InvalidTransition {
                from,
                trigger: "reset",
            }),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionStatus::Idle)
    }

    /// The submit control accepts activation only while idle
    pub fn accepts_submit(&self) -> bool {
        self.is_idle()
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Submitting => write!(f, "submitting"),
            SubmissionStatus::Succeeded => write!(f, "succeeded"),
        }
    }
}
