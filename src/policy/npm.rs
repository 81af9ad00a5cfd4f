//! `npm` policy: a small set of informational subcommands; everything
//! else (including `run`/`test`, since npm scripts can do anything) is
//! denied.

use crate::output::Decision;

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("npm-no-subcommand", "npm invoked without a subcommand");
    };

    match sub.as_str() {
        "view" | "info" | "ls" | "list" | "search" | "ping" | "whoami" | "outdated" | "--version"
        | "help" => Decision::allow(format!("npm {sub} is read-only")),
        other => Decision::deny(
            "npm-subcommand",
            format!("npm {other} is not an allowed read-only subcommand"),
        ),
    }
}
