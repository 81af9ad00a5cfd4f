//! `brew` policy: read-only inspection commands only.

use crate::output::Decision;

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("brew-no-subcommand", "brew invoked without a subcommand");
    };

    match sub.as_str() {
        "list" | "info" | "--version" | "help" | "config" | "doctor" | "deps" | "desc" | "home" => {
            Decision::allow(format!("brew {sub} is read-only"))
        }
        other => Decision::deny("brew-subcommand", format!("brew {other} is not allowed")),
    }
}
