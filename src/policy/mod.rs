//! Utility policy registry.
//!
//! Maps `argv[0]` (after [`crate::parser::wrapper`] unwrapping) to the
//! classifier that decides `allow`/`deny` for that utility. Three shapes,
//! per the module docs in each file: an unconditional flat allowlist, a
//! subcommand-gated allowlist, and a handful of custom matchers (`gh api`'s
//! method sniffing, `npx`'s tool allowlist).
//!
//! Unknown `argv[0]` is the default-deny case and is handled by the caller
//! (see [`crate::engine`]), not by this registry.

pub mod asdf;
pub mod brew;
pub mod bundle;
pub mod cargo;
pub mod flat;
pub mod gem;
pub mod gh;
pub mod git;
pub mod jj;
pub mod mise;
pub mod npm;
pub mod npx;
pub mod yarn;

use crate::output::Decision;

/// Classify a single, already-unwrapped simple command by its `argv`.
///
/// Returns `None` only when `argv` is empty, which should not happen past
/// the segmenter — callers should treat that as a deny too.
pub fn classify(argv: &[String]) -> Decision {
    let Some(utility) = argv.first() else {
        return Decision::deny("empty-argv", "simple command has no utility to judge");
    };

    if let Some(decision) = flat::classify(argv) {
        return decision;
    }

    match utility.as_str() {
        "git" => git::classify(argv),
        "jj" => jj::classify(argv),
        "gh" => gh::classify(argv),
        "yarn" => yarn::classify(argv),
        "npm" => npm::classify(argv),
        "bundle" => bundle::classify(argv),
        "mise" => mise::classify(argv),
        "asdf" => asdf::classify(argv),
        "gem" => gem::classify(argv),
        "brew" => brew::classify(argv),
        "cargo" => cargo::classify(argv),
        "npx" => npx::classify(argv),
        other => Decision::deny(
            "unknown-utility",
            format!("{other} is not a registered utility"),
        ),
    }
}
