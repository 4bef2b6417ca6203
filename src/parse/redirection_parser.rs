//! Extracts `<`/`>` operators from a token stream.

use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::parse::ParsedCommand;

/// Remove redirection operators and their operands from the token
/// sequence, recording them on the returned command. A repeated operator
/// overwrites the earlier target. The operand is taken verbatim; an
/// operator with nothing after it is malformed.
pub fn resolve_redirections(
    tokens: Vec<String>,
    is_background: bool,
) -> ShellResult<ParsedCommand> {
    let mut command = ParsedCommand {
        is_background,
        ..Default::default()
    };
    let mut iter = tokens.into_iter();
    while let Some(token) = iter.next() {
        match token.as_str() {
            "<" => command.stdin = Some(redirection_target(&token, iter.next())?),
            ">" => command.stdout = Some(redirection_target(&token, iter.next())?),
            _ => command.args.push(token),
        }
    }
    Ok(command)
}

fn redirection_target(operator: &str, operand: Option<String>) -> ShellResult<String> {
    operand.ok_or_else(|| {
        ShellError::new(
            ErrorKind::MalformedRedirection,
            format!("`{operator}` is missing a target"),
        )
        .with_context("Expected: cmd < infile > outfile")
    })
}
