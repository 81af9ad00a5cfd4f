//! `gh` (GitHub CLI) policy.
//!
//! `pr`/`issue`/`run`/`release`/`repo` are gated on a read-only *action*;
//! `api` is parsed for an effective HTTP method; `auth` only allows
//! `status`.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::output::Decision;

static READ_ONLY_ACTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["view", "list", "diff", "checks", "status"].into_iter().collect());

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("gh-no-subcommand", "gh invoked without a subcommand");
    };

    match sub.as_str() {
        "help" | "--version" => Decision::allow(format!("gh {sub} is informational")),
        "search" => Decision::allow("gh search is read-only"),
        "api" => classify_api(&argv[2..]),
        "auth" => classify_auth(&argv[2..]),
        action @ ("pr" | "issue" | "run" | "release" | "repo") => {
            classify_action(action, &argv[2..])
        }
        other => Decision::deny("gh-subcommand", format!("gh {other} is not an allowed subcommand")),
    }
}

fn classify_action(sub: &str, rest: &[String]) -> Decision {
    match rest.first().map(String::as_str) {
        Some(action) if READ_ONLY_ACTIONS.contains(action) => {
            Decision::allow(format!("gh {sub} {action} is read-only"))
        }
        Some(action) => Decision::deny("gh-action", format!("gh {sub} {action} is not read-only")),
        None => Decision::deny("gh-action", format!("gh {sub} requires a read-only action")),
    }
}

fn classify_auth(rest: &[String]) -> Decision {
    if rest.first().map(String::as_str) == Some("status") {
        Decision::allow("gh auth status is read-only")
    } else {
        Decision::deny("gh-auth", "only `gh auth status` is allowed")
    }
}

fn classify_api(rest: &[String]) -> Decision {
    let mut method: Option<String> = None;
    let mut mutating_field = false;
    let mut idx = 0;

    while idx < rest.len() {
        match rest[idx].as_str() {
            "-X" | "--method" => {
                if let Some(m) = rest.get(idx + 1) {
                    method = Some(m.to_uppercase());
                }
                idx += 2;
            }
            arg if arg.starts_with("--method=") => {
                method = Some(arg.trim_start_matches("--method=").to_uppercase());
                idx += 1;
            }
            "-f" | "-F" | "--field" | "--raw-field" => {
                mutating_field = true;
                idx += 1;
                if rest.get(idx).is_some_and(|a| !a.starts_with('-')) {
                    idx += 1;
                }
            }
            _ => idx += 1,
        }
    }

    let effective = method.unwrap_or_else(|| if mutating_field { "POST".into() } else { "GET".into() });

    match effective.as_str() {
        "GET" | "HEAD" => Decision::allow("gh api GET/HEAD is read-only"),
        other => Decision::deny("gh-api-method", format!("gh api method {other} is not read-only")),
    }
}
