//! Parsing turns one raw input line into a `ParsedCommand`.
//!
//! The grammar is deliberately flat: whitespace-delimited words, a
//! trailing `&` marker, and bare `<`/`>` operators. There is no quoting,
//! so every token is exactly what the user typed.

mod redirection_parser;
mod tokenizer;

pub use redirection_parser::resolve_redirections;
pub use tokenizer::{is_noop, split_background, tokenize};

/// A fully resolved command, ready for dispatch.
///
/// Invariants: redirection operators never appear in `args`, and
/// `is_background` is set only when the final raw token was exactly `&`
/// (that token is stripped).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// argv-style argument list, program name first
    pub args: Vec<String>,
    pub is_background: bool,
    pub stdin: Option<String>,
    pub stdout: Option<String>,
}
