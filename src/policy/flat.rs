//! The flat safe set: read-only utilities that are `Allow` regardless of
//! their arguments (arguments can no longer carry substitutions or
//! redirections — those were denied by the tokenizer).

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::output::Decision;

static FLAT_ALLOWLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "grep", "egrep", "fgrep", "rg", "find", "cat", "head", "tail", "less", "more", "jq", "yq",
        "base64", "xxd", "od", "hexdump", "pgrep", "ps", "getconf", "ls", "stat", "file", "wc",
        "sort", "uniq", "tr", "cut", "awk", "sed", "tee", "env", "printenv", "echo", "printf",
        "pwd", "whoami", "id", "date", "uname", "which", "type", "command", "column",
    ]
    .into_iter()
    .collect()
});

/// Returns `Some(decision)` if `argv[0]` is in the flat set, `None` if the
/// caller should try another policy.
pub fn classify(argv: &[String]) -> Option<Decision> {
    let utility = argv[0].as_str();
    if !FLAT_ALLOWLIST.contains(utility) {
        return None;
    }
    Some(match utility {
        "sed" => classify_sed(argv),
        "tee" => classify_tee(argv),
        _ => Decision::allow(format!("{utility} is a read-only utility")),
    })
}

fn classify_sed(argv: &[String]) -> Decision {
    let mutates = argv[1..].iter().any(|arg| {
        arg == "-i" || arg == "--in-place" || arg.starts_with("--in-place=") || arg.starts_with("-i")
    });
    if mutates {
        Decision::deny("sed-in-place", "sed -i edits files in place")
    } else {
        Decision::allow("sed without in-place editing is read-only")
    }
}

fn classify_tee(argv: &[String]) -> Decision {
    let has_file_operand = argv[1..].iter().any(|arg| !arg.starts_with('-'));
    if has_file_operand {
        Decision::deny("tee-write", "tee with a file operand writes to disk")
    } else {
        Decision::allow("tee without a file operand is a pass-through")
    }
}
