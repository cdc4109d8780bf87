/// Structured audit events for judge operators
///
/// Each verification run appends JSON-lines events to an
/// operator-configured file, correlated by a per-run id. Auditing is
/// best-effort: a broken sink degrades to a warning, never to a changed
/// verdict.
use crate::verdict::outcome::CheckResult;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Environment variable naming the audit sink. Unset disables auditing.
pub const AUDIT_LOG_ENV: &str = "VERDICTBOX_AUDIT_LOG";

#[derive(Serialize)]
struct AuditEvent<'a> {
    timestamp_ms: u64,
    run_id: &'a str,
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

/// Append-only JSON-lines audit sink.
pub struct AuditLog {
    sink: Option<File>,
}

impl AuditLog {
    /// Open the sink named by `VERDICTBOX_AUDIT_LOG`, or a disabled log.
    pub fn from_env() -> Self {
        let sink = std::env::var_os(AUDIT_LOG_ENV).and_then(|path| {
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => Some(file),
                Err(err) => {
                    log::warn!("cannot open audit log {:?}: {}", path, err);
                    None
                }
            }
        });
        AuditLog { sink }
    }

    pub fn disabled() -> Self {
        AuditLog { sink: None }
    }

    pub fn run_started(&mut self, run_id: Uuid) {
        self.append(&run_id.to_string(), "run_started", None, None);
    }

    pub fn verdict_emitted(&mut self, run_id: Uuid, result: &CheckResult) {
        self.append(
            &run_id.to_string(),
            "verdict_emitted",
            Some(result.outcome.as_str()),
            Some(&result.message),
        );
    }

    fn append(
        &mut self,
        run_id: &str,
        event: &str,
        outcome: Option<&str>,
        message: Option<&str>,
    ) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let event = AuditEvent {
            timestamp_ms: now_ms(),
            run_id,
            event,
            outcome,
            message,
        };
        match serde_json::to_string(&event) {
            Ok(line) => {
                if let Err(err) = writeln!(sink, "{}", line) {
                    log::warn!("audit write failed: {}", err);
                }
            }
            Err(err) => log::warn!("audit serialization failed: {}", err),
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::outcome::Outcome;

    #[test]
    fn disabled_log_swallows_events() {
        let mut audit = AuditLog::disabled();
        let run_id = Uuid::new_v4();
        audit.run_started(run_id);
        audit.verdict_emitted(
            run_id,
            &CheckResult {
                outcome: Outcome::Accepted,
                message: "answer is NO".to_string(),
            },
        );
    }

    #[test]
    fn events_are_json_lines_with_correlation_id() {
        let path =
            std::env::temp_dir().join(format!("verdictbox-audit-{}.jsonl", Uuid::new_v4()));
        let mut audit = AuditLog {
            sink: Some(File::create(&path).unwrap()),
        };
        let run_id = Uuid::new_v4();
        audit.run_started(run_id);
        audit.verdict_emitted(
            run_id,
            &CheckResult {
                outcome: Outcome::WrongAnswer,
                message: "expected YES 1 2, found YES 1 3".to_string(),
            },
        );
        drop(audit);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["run_id"], run_id.to_string());
        }
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "verdict_emitted");
        assert_eq!(second["outcome"], "wrong-answer");
        std::fs::remove_file(&path).unwrap();
    }
}
