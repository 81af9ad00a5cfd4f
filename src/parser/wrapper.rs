//! Wrapper unwrapper.
//!
//! Recognizes wrapping utilities (`time`, `timeout`, `xargs`, `env`,
//! `sh -c`/`bash -c`) and reduces a wrapped invocation to the command that
//! should actually be judged. Each reduction strictly shrinks `argv`, which
//! together with the engine's depth cap guarantees termination.

/// Outcome of inspecting `argv[0]` for wrapper behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnwrapStep {
    /// Not a wrapper (or nothing left to unwrap); classify `argv` as-is.
    Terminal,
    /// A new, strictly shorter `argv` to keep unwrapping/classifying.
    Reduced(Vec<String>),
    /// `sh -c` / `bash -c`: re-tokenize and re-evaluate this script as a
    /// full chain from the top.
    Reenter(String),
    /// The wrapper was invoked in a shape we refuse to reason about.
    Deny(&'static str),
}

fn is_assignment_word(word: &str) -> bool {
    let Some(eq) = word.find('=') else {
        return false;
    };
    let name = &word[..eq];
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_valid_duration(word: &str) -> bool {
    let digits_end = word
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(word.len());
    if digits_end == 0 {
        return false;
    }
    match &word[digits_end..] {
        "" => true,
        "s" | "m" | "h" | "d" => true,
        _ => false,
    }
}

fn unwrap_time(argv: &[String]) -> UnwrapStep {
    if argv.len() < 2 {
        return UnwrapStep::Deny("time requires a command");
    }
    UnwrapStep::Reduced(argv[1..].to_vec())
}

fn unwrap_timeout(argv: &[String]) -> UnwrapStep {
    let mut idx = 1;
    loop {
        match argv.get(idx).map(String::as_str) {
            Some("-s") | Some("--signal") | Some("-k") | Some("--kill-after") => {
                if argv.get(idx + 1).is_none() {
                    return UnwrapStep::Deny("timeout option missing its argument");
                }
                idx += 2;
            }
            Some("--preserve-status") | Some("--foreground") => idx += 1,
            Some(flag) if flag.starts_with('-') => {
                return UnwrapStep::Deny("unrecognized timeout option");
            }
            Some(_) => break,
            None => return UnwrapStep::Deny("timeout missing a duration"),
        }
    }

    let Some(duration) = argv.get(idx) else {
        return UnwrapStep::Deny("timeout missing a duration");
    };
    if !is_valid_duration(duration) {
        return UnwrapStep::Deny("timeout duration is not of the form [0-9]+[smhd]?");
    }
    idx += 1;
    if idx >= argv.len() {
        return UnwrapStep::Deny("timeout missing a command");
    }
    UnwrapStep::Reduced(argv[idx..].to_vec())
}

fn unwrap_xargs(argv: &[String]) -> UnwrapStep {
    let mut idx = 1;
    loop {
        match argv.get(idx).map(String::as_str) {
            Some("-0") => idx += 1,
            Some("-n") | Some("-I") => {
                if argv.get(idx + 1).is_none() {
                    return UnwrapStep::Deny("xargs option missing its argument");
                }
                idx += 2;
            }
            Some("--") => {
                idx += 1;
                break;
            }
            Some(flag) if flag.starts_with('-') => {
                return UnwrapStep::Deny("unrecognized xargs option");
            }
            Some(_) => break,
            None => break,
        }
    }
    if idx >= argv.len() {
        return UnwrapStep::Deny("xargs missing a utility to run");
    }
    UnwrapStep::Reduced(argv[idx..].to_vec())
}

fn unwrap_shell_c(argv: &[String]) -> UnwrapStep {
    if argv.len() == 3 && argv[1] == "-c" {
        UnwrapStep::Reenter(argv[2].clone())
    } else {
        UnwrapStep::Deny("sh/bash only allowed as `-c SCRIPT` (exactly three argv elements)")
    }
}

fn unwrap_env(argv: &[String]) -> UnwrapStep {
    let mut idx = 1;
    while argv.get(idx).map(|w| is_assignment_word(w)).unwrap_or(false) {
        idx += 1;
    }
    if idx >= argv.len() {
        UnwrapStep::Terminal
    } else {
        UnwrapStep::Reduced(argv[idx..].to_vec())
    }
}

/// Inspect `argv[0]` for one wrapper layer. Callers loop until
/// [`UnwrapStep::Terminal`], [`UnwrapStep::Reenter`], or [`UnwrapStep::Deny`].
pub fn unwrap_one(argv: &[String]) -> UnwrapStep {
    match argv.first().map(String::as_str) {
        Some("time") => unwrap_time(argv),
        Some("timeout") => unwrap_timeout(argv),
        Some("xargs") => unwrap_xargs(argv),
        Some("sh") | Some("bash") => unwrap_shell_c(argv),
        Some("env") => unwrap_env(argv),
        _ => UnwrapStep::Terminal,
    }
}
