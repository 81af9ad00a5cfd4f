//! Decision engine: tokenize, segment, unwrap, classify.
//!
//! `decide` is the top-level entry point and the only thing the rest of
//! the crate needs from this module. It is a pure function of its input
//! string — no I/O, no shared mutable state beyond the lazily-initialized
//! policy tables in [`crate::policy`].

use crate::output::Decision;
use crate::parser::{segment, SimpleCommand};
use crate::parser::wrapper::{unwrap_one, UnwrapStep};
use crate::policy;

/// Bounds both the wrapper-unwrap chain for a single simple command and the
/// `sh -c`/`bash -c` re-entry depth, so adversarial nesting (`sh -c "sh -c
/// '...'"`) cannot loop forever.
const MAX_UNWRAP_DEPTH: usize = 8;

/// Classify a full command line. Every failure mode — a parse error, an
/// unknown utility, a denied subcommand, a disallowed wrapper shape, or
/// exceeding the unwrap depth cap — resolves to [`Decision::Deny`]. The
/// engine never panics and never raises; it always produces a decision.
pub fn decide(input: &str) -> Decision {
    decide_at_depth(input, 0)
}

fn decide_at_depth(input: &str, depth: usize) -> Decision {
    if depth > MAX_UNWRAP_DEPTH {
        return Decision::deny("depth-exceeded", "sh -c / bash -c nesting exceeded the depth cap");
    }

    let chain = match segment(input) {
        Ok(chain) => chain,
        Err(e) => return Decision::deny("parse-error", e.to_string()),
    };

    for command in &chain {
        let decision = classify_simple_command(command, depth);
        if decision.is_deny() {
            return decision;
        }
    }

    Decision::allow("every simple command in the chain is allowed")
}

/// Unwrap `command.argv` through wrapper layers (discarding
/// `command.assignments`, which are transparent to policy — see
/// [`crate::parser::wrapper`]) and classify the result.
fn classify_simple_command(command: &SimpleCommand, depth: usize) -> Decision {
    let mut argv = command.argv.clone();
    let mut steps = 0usize;

    loop {
        if steps > MAX_UNWRAP_DEPTH {
            return Decision::deny("depth-exceeded", "wrapper unwrapping did not converge");
        }

        match unwrap_one(&argv) {
            UnwrapStep::Terminal => return policy::classify(&argv),
            UnwrapStep::Reduced(next) => {
                if next.len() >= argv.len() {
                    return Decision::deny("depth-exceeded", "unwrap step did not shrink argv");
                }
                argv = next;
                steps += 1;
            }
            UnwrapStep::Reenter(script) => return decide_at_depth(&script, depth + 1),
            UnwrapStep::Deny(reason) => return Decision::deny("disallowed-wrapper", reason),
        }
    }
}
