//! claude-guardgate - a shell-command safety gate for Claude Code hooks
//!
//! Given a single shell command line, the engine decides whether it is
//! read-only/side-effect-free enough to auto-approve, or whether it must
//! be referred to a human. It is consumed as a `PreToolUse` hook: the hook
//! reads a JSON request from stdin and writes a JSON decision to stdout.
//!
//! # Architecture
//!
//! - [`parser`] — tokenizer, segmenter, and wrapper unwrapper: the shell
//!   grammar subset this engine actually needs (see module docs there for
//!   exactly what it does and doesn't parse).
//! - [`policy`] — the per-utility allowlist registry (`argv[0]` →
//!   classifier), both the flat read-only set and the structured
//!   sub-policies for `git`, `gh`, `jj`, and the rest.
//! - [`engine`] — the top-level combinator tying the above together into
//!   one pure function, [`engine::decide`].
//! - [`input`]/[`output`] — the hook JSON contract.
//! - [`config`]/[`audit`] — ambient (non-security) scaffolding: whether to
//!   log decisions and where.
//!
//! # Example
//!
//! ```
//! use claude_guardgate::engine::decide;
//!
//! assert!(decide("grep foo file.txt | head -5").is_allow());
//! assert!(decide("cat file | rm -rf /").is_deny());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod parser;
pub mod policy;

pub use config::Config;
pub use engine::decide;
pub use input::{HookInput, ToolInput};
pub use output::{Decision, HookOutput};
