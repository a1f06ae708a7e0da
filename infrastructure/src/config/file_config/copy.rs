//! Form copy from TOML (`[copy]` section)

use folio_domain::{ConfigIssue, ConfigIssueCode, FormCopy};
use serde::{Deserialize, Serialize};

/// Raw form copy from TOML. Every string is optional; unset keeps the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCopyConfig {
    pub required: Option<String>,
    pub invalid_email: Option<String>,
    pub rejected: Option<String>,
    pub sent: Option<String>,
    pub label_idle: Option<String>,
    pub label_sending: Option<String>,
    pub label_sent: Option<String>,
}

impl FileCopyConfig {
    /// Merge configured strings over the defaults.
    ///
    /// An empty string is reported as a warning and the default is kept.
    pub fn to_copy(&self) -> (FormCopy, Vec<ConfigIssue>) {
        let mut copy = FormCopy::default();
        let mut issues = Vec::new();

        let slots: [(&str, &Option<String>, &mut String); 7] = [
            ("copy.required", &self.required, &mut copy.required),
            ("copy.invalid_email", &self.invalid_email, &mut copy.invalid_email),
            ("copy.rejected", &self.rejected, &mut copy.rejected),
            ("copy.sent", &self.sent, &mut copy.sent),
            ("copy.label_idle", &self.label_idle, &mut copy.label_idle),
            ("copy.label_sending", &self.label_sending, &mut copy.label_sending),
            ("copy.label_sent", &self.label_sent, &mut copy.label_sent),
        ];

        for (field, configured, target) in slots {
            let Some(value) = configured else {
                continue;
            };
            if value.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyCopy {
                        field: field.to_string(),
                    },
                    format!("{}: empty text, keeping '{}'", field, target),
                ));
            } else {
                *target = value.clone();
            }
        }

        (copy, issues)
    }
}
