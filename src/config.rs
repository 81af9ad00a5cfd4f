//! Ambient (non-security) configuration.
//!
//! The security policy tables in [`crate::policy`] are compiled-in
//! constants and are never sourced from a file — that's the whole point of
//! an allowlist gate (see the crate docs). This module covers only the
//! ambient settings: whether audit logging is on, and where the log lives.

use serde::Deserialize;
use std::path::PathBuf;

/// General (ambient) configuration section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Whether to append a JSONL audit record for every decision.
    pub audit_log: bool,

    /// Where to append audit records. `~` is expanded against the user's
    /// home directory.
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: true,
            audit_path: Some("~/.claude/guardgate/audit.jsonl".to_string()),
        }
    }
}

/// Top-level configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
}

impl Config {
    /// Load from the default search locations, falling back to the
    /// compiled-in defaults if nothing is found or parseable.
    pub fn load() -> Self {
        let config_paths = [
            dirs::home_dir().map(|p| p.join(".claude/guardgate/config.toml")),
            Some(PathBuf::from("/etc/claude-guardgate/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from an explicit path (the `--config PATH` flag).
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand a leading `~/` against the user's home directory.
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// The audit log path, expanded, if audit logging is configured at all.
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration, matching [`Config::default`].
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = true
audit_path = "~/.claude/guardgate/audit.jsonl"
"#;
