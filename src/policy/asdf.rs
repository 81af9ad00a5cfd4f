//! `asdf` policy: read-only inspection commands only.

use crate::output::Decision;

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("asdf-no-subcommand", "asdf invoked without a subcommand");
    };

    match sub.as_str() {
        "current" | "which" | "help" | "list" | "--version" | "info" => {
            Decision::allow(format!("asdf {sub} is read-only"))
        }
        "plugin" => {
            if argv.get(2).map(String::as_str) == Some("list") {
                Decision::allow("asdf plugin list is read-only")
            } else {
                Decision::deny("asdf-plugin", "only `asdf plugin list` is allowed")
            }
        }
        other => Decision::deny("asdf-subcommand", format!("asdf {other} is not allowed")),
    }
}
