//! Shell-syntax parsing: tokenizer, segmenter, and wrapper unwrapper.
//!
//! This is a deliberately small subset of shell grammar — just enough for
//! the policy layer to reason about pipelines, chains, and the handful of
//! wrapping utilities it needs to see through. It is not a POSIX parser.

pub mod segment;
pub mod token;
pub mod wrapper;

pub use segment::{segment, Chain, SimpleCommand};
pub use token::{tokenize, ParseError, Token};
pub use wrapper::{unwrap_one, UnwrapStep};
