//! JSONL file writer for interaction records.
//!
//! Each [`InteractionRecord`] is serialized as a single JSON line tagged by
//! `type`, stamped with a `timestamp`, and appended through a buffered writer.

use folio_application::{InteractionLogger, InteractionRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL interaction logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and on `Drop`.
pub struct JsonlInteractionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlInteractionLogger {
    /// Open (or create) the log at `path` for appending.
    ///
    /// Creates parent directories if needed. Returns `None` if the file
    /// cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create interaction log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open interaction log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InteractionLogger for JsonlInteractionLogger {
    fn log(&self, record: InteractionRecord) {
        let mut value = match serde_json::to_value(&record) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => {
                warn!("{} record is not a JSON object", record.record_type());
                return;
            }
            Err(e) => {
                warn!("Could not serialize {} record: {}", record.record_type(), e);
                return;
            }
        };
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        value.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp),
        );

        let line = serde_json::Value::Object(value).to_string();
        let Ok(mut writer) = self.writer.lock() else {
            warn!("Interaction log writer is poisoned, dropping record");
            return;
        };
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!(
                "Could not write interaction log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl Drop for JsonlInteractionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writer.flush()
        {
            warn!(
                "Could not flush interaction log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{FieldId, FieldIssue, FieldRole, IssueKind};

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interactions.jsonl");
        let logger = JsonlInteractionLogger::new(&path).unwrap();

        logger.log(InteractionRecord::SubmissionRejected {
            issues: vec![FieldIssue {
                field: FieldId(1),
                role: FieldRole::Email,
                kind: IssueKind::InvalidEmail,
            }],
        });
        logger.log(InteractionRecord::SubmissionStarted { fields: 3 });
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "submission_rejected");
        assert_eq!(lines[0]["issues"][0]["kind"], "invalid_email");
        assert_eq!(lines[0]["issues"][0]["role"], "email");
        assert!(lines[0].get("timestamp").is_some());
        assert_eq!(lines[1]["type"], "submission_started");
        assert_eq!(lines[1]["fields"], 3);
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.jsonl");

        for at_ms in [1500, 4000] {
            let logger = JsonlInteractionLogger::new(&path).unwrap();
            logger.log(InteractionRecord::SubmissionSucceeded { at_ms });
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["type"], "submission_succeeded");
        assert_eq!(lines[1]["at_ms"], 4000);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_does_not_panic() {
        // Every write to /dev/full fails with ENOSPC
        let logger = JsonlInteractionLogger::new("/dev/full").unwrap();
        logger.log(InteractionRecord::SubmissionStarted { fields: 3 });
        logger.log(InteractionRecord::SubmissionSucceeded { at_ms: 1500 });
    }

    #[test]
    fn test_unopenable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file
        assert!(JsonlInteractionLogger::new(dir.path()).is_none());
    }
}
