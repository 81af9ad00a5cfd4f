//! `mise` policy: read-only inspection commands only.

use crate::output::Decision;

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("mise-no-subcommand", "mise invoked without a subcommand");
    };

    match sub.as_str() {
        "ls" | "list" | "current" | "which" | "doctor" | "--version" | "env" | "help" => {
            Decision::allow(format!("mise {sub} is read-only"))
        }
        "settings" => {
            if argv.get(2).map(String::as_str) == Some("get") {
                Decision::allow("mise settings get is read-only")
            } else {
                Decision::deny("mise-settings", "only `mise settings get` is allowed")
            }
        }
        other => Decision::deny("mise-subcommand", format!("mise {other} is not allowed")),
    }
}
