//! `bundle` policy: informational subcommands plus `exec <tool>` gated on
//! a bundled-tools allowlist.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::output::Decision;

static BUNDLED_TOOLS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "rspec",
        "standardrb",
        "rubocop",
        "cucumber",
        "brakeman",
        "erb_lint",
        "herb",
        "steep",
        "sorbet",
    ]
    .into_iter()
    .collect()
});

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("bundle-no-subcommand", "bundle invoked without a subcommand");
    };

    match sub.as_str() {
        "list" | "info" | "show" | "check" | "--version" => {
            Decision::allow(format!("bundle {sub} is read-only"))
        }
        "exec" => classify_exec(&argv[2..]),
        other => Decision::deny("bundle-subcommand", format!("bundle {other} is not allowed")),
    }
}

fn classify_exec(rest: &[String]) -> Decision {
    let Some(tool) = rest.first() else {
        return Decision::deny("bundle-exec", "bundle exec requires a tool name");
    };

    if tool == "srb" {
        return if rest.get(1).map(String::as_str) == Some("tc") {
            Decision::allow("bundle exec srb tc is a read-only typecheck")
        } else {
            Decision::deny("bundle-exec", "bundle exec srb is only allowed as `srb tc`")
        };
    }

    if BUNDLED_TOOLS.contains(tool.as_str()) {
        Decision::allow(format!("bundle exec {tool} is an allowed test/lint tool"))
    } else {
        Decision::deny(
            "bundle-exec",
            format!("bundle exec {tool} is not in the bundled-tools allowlist"),
        )
    }
}
