//! Whitespace tokenizer for command lines.

/// Split a raw line into non-empty whitespace-delimited tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// True when the token sequence carries no command: a blank line, or a
/// first token starting with `#`. Only the first token can start a
/// comment; a later `#` is an ordinary argument.
pub fn is_noop(tokens: &[String]) -> bool {
    match tokens.first() {
        None => true,
        Some(first) => first.starts_with('#'),
    }
}

/// Strip a trailing bare `&`, reporting whether the command asked to run
/// in the background. An `&` anywhere else stays a literal argument.
pub fn split_background(mut tokens: Vec<String>) -> (Vec<String>, bool) {
    if tokens.last().map(String::as_str) == Some("&") {
        tokens.pop();
        (tokens, true)
    } else {
        (tokens, false)
    }
}
