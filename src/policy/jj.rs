//! `jj` (Jujutsu) policy: a small allowlist of read-only subcommands, plus
//! a few two-word forms.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::output::Decision;

static SINGLE_WORD_ALLOWED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["log", "diff", "show", "status", "st", "help", "--version", "evolog", "interdiff"]
        .into_iter()
        .collect()
});

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("jj-no-subcommand", "jj invoked without a subcommand");
    };

    if SINGLE_WORD_ALLOWED.contains(sub.as_str()) {
        return Decision::allow(format!("jj {sub} is read-only"));
    }

    if let Some(second) = argv.get(2) {
        match (sub.as_str(), second.as_str()) {
            ("op", "log") => return Decision::allow("jj op log is read-only"),
            ("file", "show") => return Decision::allow("jj file show is read-only"),
            ("config", "get") => return Decision::allow("jj config get is read-only"),
            _ => {}
        }
    }

    Decision::deny("jj-subcommand", format!("jj {sub} is not an allowed read-only subcommand"))
}
