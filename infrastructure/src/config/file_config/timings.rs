//! Timing configuration from TOML (`[timings]` section)

use folio_domain::{ConfigIssue, ConfigIssueCode, InteractionTimings};
use serde::{Deserialize, Serialize};

/// Raw timing configuration from TOML, all values in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimingsConfig {
    pub field_error_ms: u64,
    pub notification_ms: u64,
    pub exit_animation_ms: u64,
    pub submit_delay_ms: u64,
    pub reset_delay_ms: u64,
    pub press_release_ms: u64,
}

impl Default for FileTimingsConfig {
    fn default() -> Self {
        let d = InteractionTimings::default();
        Self {
            field_error_ms: d.field_error_ms,
            notification_ms: d.notification_ms,
            exit_animation_ms: d.exit_animation_ms,
            submit_delay_ms: d.submit_delay_ms,
            reset_delay_ms: d.reset_delay_ms,
            press_release_ms: d.press_release_ms,
        }
    }
}

impl FileTimingsConfig {
    /// Convert to domain timings.
    ///
    /// A zero lifetime would remove feedback before anyone could read it,
    /// so `field_error_ms` and `notification_ms` must be positive.
    pub fn to_timings(&self) -> (InteractionTimings, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        for (field, value) in [
            ("timings.field_error_ms", self.field_error_ms),
            ("timings.notification_ms", self.notification_ms),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroDuration {
                        field: field.to_string(),
                    },
                    format!("{}: must be greater than zero", field),
                ));
            }
        }

        let timings = InteractionTimings {
            field_error_ms: self.field_error_ms,
            notification_ms: self.notification_ms,
            exit_animation_ms: self.exit_animation_ms,
            submit_delay_ms: self.submit_delay_ms,
            reset_delay_ms: self.reset_delay_ms,
            press_release_ms: self.press_release_ms,
        };
        (timings, issues)
    }
}
