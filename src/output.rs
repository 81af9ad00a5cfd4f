//! Output formatting for the Claude Code hook response.
//!
//! Produces the JSON envelope the hook contract requires: `allow` must
//! contain the literal substring `"permissionDecision": "allow"` on stdout;
//! anything else (including no output at all) is read by the consumer as
//! `deny`. See the crate-level docs for the full contract.
//!
//! The reference consumer was written against Python's `json.dumps`, whose
//! default `", "`/`": "` separators put a space after every colon.
//! `serde_json`'s compact writer omits that space, which would silently turn
//! every `allow` into a `deny` downstream, so this module serializes with a
//! formatter that matches the `": "` spacing instead of the library default.

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// Like `serde_json`'s compact output, but writes `": "` after an object
/// key instead of `":"`, matching the spacing the reference consumer
/// discriminates on.
#[derive(Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

const FALLBACK_DENY_JSON: &str =
    r#"{"hookSpecificOutput": {"hookEventName": "PreToolUse", "permissionDecision": "deny"}}"#;

/// Hook-level output envelope.
#[derive(Debug, Serialize)]
pub struct HookOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,

    #[serde(rename = "systemMessage", skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HookSpecificOutput {
    #[serde(rename = "hookEventName")]
    pub hook_event_name: String,

    #[serde(rename = "permissionDecision")]
    pub permission_decision: String,
}

/// The engine's answer for one simple command or one full chain: `Allow`,
/// or `Deny` with a short reason carried for diagnostics/audit only — the
/// reason is never part of the security contract.
#[derive(Debug, Clone)]
pub enum Decision {
    Allow { reason: String },
    Deny { rule_id: String, reason: String },
}

impl Decision {
    pub fn allow(reason: impl Into<String>) -> Self {
        Decision::Allow {
            reason: reason.into(),
        }
    }

    pub fn deny(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Deny {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }

    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Decision::Allow { .. } => None,
            Decision::Deny { rule_id, .. } => Some(rule_id),
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Decision::Allow { reason } => reason,
            Decision::Deny { reason, .. } => reason,
        }
    }
}

impl HookOutput {
    pub fn allow() -> Self {
        HookOutput {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: "PreToolUse".to_string(),
                permission_decision: "allow".to_string(),
            },
            system_message: None,
        }
    }

    pub fn deny_with_rule(rule_id: &str, reason: &str) -> Self {
        HookOutput {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: "PreToolUse".to_string(),
                permission_decision: "deny".to_string(),
            },
            system_message: Some(format!("[guardgate:{}] Blocked: {}", rule_id, reason)),
        }
    }

    pub fn from_decision(decision: &Decision) -> Self {
        match decision {
            Decision::Allow { .. } => HookOutput::allow(),
            Decision::Deny { rule_id, reason } => HookOutput::deny_with_rule(rule_id, reason),
        }
    }

    pub fn to_json(&self) -> String {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
        match self.serialize(&mut serializer) {
            Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| FALLBACK_DENY_JSON.to_string()),
            Err(_) => FALLBACK_DENY_JSON.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_output_carries_the_load_bearing_discriminator() {
        let json = HookOutput::allow().to_json();
        assert!(json.contains(r#""permissionDecision": "allow""#));
    }

    #[test]
    fn deny_output_carries_deny_and_a_system_message() {
        let json = HookOutput::deny_with_rule("rm-root", "deletes the filesystem root").to_json();
        assert!(json.contains(r#""permissionDecision": "deny""#));
        assert!(json.contains("rm-root"));
    }

    #[test]
    fn from_decision_roundtrips_both_variants() {
        assert!(HookOutput::from_decision(&Decision::allow("ok"))
            .to_json()
            .contains("allow"));
        assert!(HookOutput::from_decision(&Decision::deny("x", "y"))
            .to_json()
            .contains("deny"));
    }

    #[test]
    fn serialization_never_panics_even_on_a_malformed_engine_reason() {
        let decision = Decision::deny("r", "contains \" a quote and \\ a backslash");
        let json = HookOutput::from_decision(&decision).to_json();
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }
}
