//! Input parsing for the Claude Code hook JSON envelope.
//!
//! The engine only judges the `Bash` tool. Any other `tool_name` is passed
//! straight through as `allow` by the hook glue in `main.rs` — this module
//! just needs to recognize the shape well enough to extract `tool_input
//! .command` when it's there.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HookInput {
    pub tool_name: String,

    pub tool_input: ToolInput,

    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub hook_event_name: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ToolInput {
    /// `Bash` invocation; `description`/`timeout` are accepted but ignored
    /// by the engine (carried through only for audit logging).
    Bash {
        command: String,
        #[allow(dead_code)]
        description: Option<String>,
        #[allow(dead_code)]
        timeout: Option<u64>,
    },

    /// Any other tool's input, preserved only for the audit summary.
    Other { raw: serde_json::Value },
}

impl<'de> Deserialize<'de> for ToolInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        if let Some(command) = value.get("command").and_then(|v| v.as_str()) {
            return Ok(ToolInput::Bash {
                command: command.to_string(),
                description: value
                    .get("description")
                    .and_then(|v| v.as_str())
                    .map(String::from),
                timeout: value.get("timeout").and_then(|v| v.as_u64()),
            });
        }

        Ok(ToolInput::Other { raw: value })
    }
}

impl HookInput {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Short summary for audit logging; never includes the full command
    /// when it would blow past a reasonable log line length.
    pub fn summary(&self) -> String {
        match &self.tool_input {
            ToolInput::Bash { command, .. } => {
                let truncated = if command.len() > 200 {
                    let cut = command
                        .char_indices()
                        .map(|(i, _)| i)
                        .take_while(|&i| i <= 200)
                        .last()
                        .unwrap_or(0);
                    format!("{}...", &command[..cut])
                } else {
                    command.clone()
                };
                format!("Bash: {}", truncated)
            }
            ToolInput::Other { .. } => format!("{}: (not judged by this engine)", self.tool_name),
        }
    }

    /// The command text to judge, if this invocation is a `Bash` tool call.
    pub fn command(&self) -> Option<&str> {
        match &self.tool_input {
            ToolInput::Bash { command, .. } => Some(command),
            ToolInput::Other { .. } => None,
        }
    }
}
