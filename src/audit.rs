//! JSONL audit logging.
//!
//! Out of scope for the decision engine itself (see the crate docs on the
//! engine/ambient split) but expected production scaffolding for the CLI
//! that wraps it: one line per invocation, append-only, flushed after
//! every write so a crash never loses the last record. A failure to write
//! is reported to stderr but never changes the emitted decision — the
//! audit trail is a side channel, not part of the security contract.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::HookInput;
use crate::output::Decision;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    DryRun,
    Disabled,
    Error,
}

#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub tool: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    pub input_summary: String,
    pub reason: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// How the invocation's raw decision should be recorded — plain pass
/// through, disabled via the environment escape hatch, or dry-run (real
/// decision computed and logged, but stdout always says `allow`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Normal,
    Disabled,
    DryRun,
}

impl AuditEntry {
    pub fn new(input: &HookInput, decision: &Decision, mode: RunMode) -> Self {
        let (level, rule_id, reason) = match mode {
            RunMode::Disabled => (LogLevel::Disabled, None, "GUARDGATE_DISABLED".to_string()),
            RunMode::DryRun => (
                LogLevel::DryRun,
                decision.rule_id().map(String::from),
                decision.reason().to_string(),
            ),
            RunMode::Normal => match decision {
                Decision::Allow { reason } => (LogLevel::Allowed, None, reason.clone()),
                Decision::Deny { rule_id, reason } => {
                    (LogLevel::Blocked, Some(rule_id.clone()), reason.clone())
                }
            },
        };

        Self {
            timestamp: Utc::now(),
            level,
            tool: input.tool_name.clone(),
            rule_id,
            input_summary: input.summary(),
            reason,
            session_id: input.session_id.clone(),
        }
    }
}

pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    pub fn log(&mut self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    pub fn log_decision(
        &mut self,
        input: &HookInput,
        decision: &Decision,
        mode: RunMode,
    ) -> Result<(), std::io::Error> {
        let entry = AuditEntry::new(input, decision, mode);
        self.log(&entry)
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self { writer: None }
    }
}
