//! Parsing and expansion helpers for the shell.
//!
//! This crate exposes a minimal API so fuzz targets and unit tests can
//! link only parsing and expansion logic without pulling in interactive
//! deps.

mod error;
mod expansion;
mod parse;

pub use error::{ErrorKind, ShellError, ShellResult};
pub use parse::ParsedCommand;

/// Tokenize a command line into whitespace-delimited words.
pub fn parse_tokens(input: &str) -> Vec<String> {
    parse::tokenize(input)
}

/// True when the tokens carry no command (blank line or `#` comment).
pub fn is_noop(tokens: &[String]) -> bool {
    parse::is_noop(tokens)
}

/// Replace each `$$` marker with the decimal rendering of `pid`.
pub fn expand_tokens(tokens: Vec<String>, pid: i32) -> Vec<String> {
    expansion::expand_tokens(tokens, pid)
}

/// Split a trailing bare `&` off the token stream.
pub fn parse_background(tokens: Vec<String>) -> (Vec<String>, bool) {
    parse::split_background(tokens)
}

/// Resolve `<`/`>` operators into a `ParsedCommand`.
pub fn parse_command(tokens: Vec<String>, is_background: bool) -> ShellResult<ParsedCommand> {
    parse::resolve_redirections(tokens, is_background)
}

/// Fuzz helper: drive the full parse/expand path on arbitrary bytes.
pub fn fuzz_parse_bytes(data: &[u8]) {
    let input = String::from_utf8_lossy(data);
    let tokens = parse::tokenize(&input);
    if parse::is_noop(&tokens) {
        return;
    }
    let tokens = expansion::expand_tokens(tokens, 4821);
    let (tokens, background) = parse::split_background(tokens);
    let _ = parse::resolve_redirections(tokens, background);
}
