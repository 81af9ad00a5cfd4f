//! claude-guardgate - shell-command safety gate for Claude Code hooks
//!
//! # Usage
//!
//! ```bash
//! # As a Claude Code PreToolUse hook (reads JSON from stdin, writes JSON to stdout)
//! echo '{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}' | claude-guardgate
//!
//! # Dry-run: compute and audit the real decision, but always emit allow
//! claude-guardgate --dry-run
//! ```

use std::env;
use std::io::{self, Read, Write};

use claude_guardgate::{
    audit::{AuditLogger, RunMode},
    config::Config,
    engine,
    input::HookInput,
    output::HookOutput,
};

fn print_version() {
    println!("claude-guardgate {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"claude-guardgate - shell-command safety gate for Claude Code hooks

USAGE:
    claude-guardgate [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -d, --dry-run           Compute and audit the real decision, but always emit allow
    -c, --config PATH       Path to the ambient config file

ENVIRONMENT:
    GUARDGATE_DISABLED=1    Bypass all checks (emits allow, still audits)
    GUARDGATE_DRY_RUN=1     Same effect as --dry-run

USAGE AS A HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "type": "command",
          "command": "~/.claude/guardgate/claude-guardgate",
          "timeout": 5000,
          "tools": ["Bash"]
        }}]
      }}
    }}
"#
    );
}

struct Args {
    help: bool,
    version: bool,
    dry_run: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            dry_run: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    result.config_path = Some(arg.trim_start_matches("--config=").to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn write_output(output: &HookOutput) {
    let json = output.to_json();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", json);
    let _ = handle.flush();
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    let config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    let disabled = env::var("GUARDGATE_DISABLED").is_ok();
    let dry_run = args.dry_run || env::var("GUARDGATE_DRY_RUN").is_ok();

    let audit_path = if config.general.audit_log {
        config.audit_path()
    } else {
        None
    };
    let mut logger = AuditLogger::new(audit_path.as_deref());

    let mut input_text = String::new();
    if io::stdin().read_to_string(&mut input_text).is_err() {
        input_text.clear();
    }

    if input_text.trim().is_empty() {
        write_output(&HookOutput::allow());
        return;
    }

    let input = match HookInput::from_json(&input_text) {
        Ok(input) => input,
        Err(e) => {
            // Fail closed: a malformed envelope could itself be an evasion attempt.
            eprintln!("Error: Failed to parse hook input (denying): {}", e);
            write_output(&HookOutput::deny_with_rule(
                "parse-error",
                &format!("failed to parse hook input: {e}"),
            ));
            return;
        }
    };

    // Only the Bash tool is judged; anything else passes straight through.
    let Some(command) = input.command() else {
        write_output(&HookOutput::allow());
        return;
    };

    let decision = if disabled {
        claude_guardgate::Decision::allow("GUARDGATE_DISABLED")
    } else {
        engine::decide(command)
    };

    let mode = if disabled {
        RunMode::Disabled
    } else if dry_run {
        RunMode::DryRun
    } else {
        RunMode::Normal
    };

    if let Err(e) = logger.log_decision(&input, &decision, mode) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    let output = if dry_run && !disabled {
        HookOutput::allow()
    } else {
        HookOutput::from_decision(&decision)
    };

    write_output(&output);
}
