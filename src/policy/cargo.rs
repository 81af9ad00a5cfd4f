//! `cargo` policy: build/test/lint/inspection subcommands only.

use crate::output::Decision;

pub fn classify(argv: &[String]) -> Decision {
    let Some(sub) = argv.get(1) else {
        return Decision::deny("cargo-no-subcommand", "cargo invoked without a subcommand");
    };

    match sub.as_str() {
        "clippy" | "test" | "build" | "check" | "doc" | "search" | "--version" | "bench" | "fmt"
        | "tree" | "metadata" => Decision::allow(format!("cargo {sub} is read-only/build-only")),
        other => Decision::deny("cargo-subcommand", format!("cargo {other} is not allowed")),
    }
}
