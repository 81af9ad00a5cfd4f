//! `gem` policy: read-only inspection commands only.

use crate::output::Decision;

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("gem-no-subcommand", "gem invoked without a subcommand");
    };

    match sub.as_str() {
        "list" | "info" | "environment" | "env" | "which" | "pristine" | "--version" | "help"
        | "contents" | "specification" => Decision::allow(format!("gem {sub} is read-only")),
        other => Decision::deny("gem-subcommand", format!("gem {other} is not allowed")),
    }
}
