//! `yarn` policy: informational subcommands plus test-only script runs.

use crate::output::Decision;

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("yarn-no-subcommand", "yarn invoked without a subcommand");
    };

    match sub.as_str() {
        "list" | "info" | "why" | "--version" | "-v" => {
            Decision::allow(format!("yarn {sub} is read-only"))
        }
        "test" => Decision::allow("yarn test runs the test suite"),
        s if s.starts_with("test:") => Decision::allow(format!("yarn {s} runs a test script")),
        "run" => classify_run(&argv[2..]),
        other => Decision::deny("yarn-subcommand", format!("yarn {other} is not allowed")),
    }
}

fn classify_run(rest: &[String]) -> Decision {
    match rest.first().map(String::as_str) {
        Some("test") => Decision::allow("yarn run test runs the test suite"),
        Some(s) if s.starts_with("test:") => {
            Decision::allow(format!("yarn run {s} runs a test script"))
        }
        Some(other) => Decision::deny("yarn-run", format!("yarn run {other} is not a test script")),
        None => Decision::deny("yarn-run", "yarn run requires a script name"),
    }
}
