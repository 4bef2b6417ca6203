//! `$$` expansion, the only expansion this shell performs.
//!
//! Each `$$` pair inside a token becomes the shell's own PID. Scanning
//! consumes both characters before resuming, so markers never overlap:
//! `$$$` expands to `<pid>$`.

/// Expand every token against the given shell PID.
pub fn expand_tokens(tokens: Vec<String>, pid: i32) -> Vec<String> {
    let pid_text = pid.to_string();
    tokens
        .into_iter()
        .map(|token| expand_pid_markers(&token, &pid_text))
        .collect()
}

/// Replace each `$$` in one token with `pid_text`, left to right. No
/// other substring is altered.
pub fn expand_pid_markers(token: &str, pid_text: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'$') {
            chars.next();
            out.push_str(pid_text);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn replaces_each_marker() {
        assert_eq!(expand_pid_markers("pid$$", "4821"), "pid4821");
        assert_eq!(expand_pid_markers("$$-$$", "4821"), "4821-4821");
    }

    #[test]
    fn markers_do_not_overlap() {
        assert_eq!(expand_pid_markers("$$$", "4821"), "4821$");
    }

    #[test]
    fn quadruple_marker_expands_twice() {
        assert_eq!(expand_pid_markers("$$$$", "4821"), "48214821");
    }

    #[test]
    fn lone_dollar_is_literal() {
        assert_eq!(expand_pid_markers("a$b", "4821"), "a$b");
        assert_eq!(expand_pid_markers("$", "4821"), "$");
    }

    #[test]
    fn expand_tokens_touches_every_token() {
        let tokens = vec!["echo".to_string(), "$$".to_string(), "x$$y".to_string()];
        assert_eq!(expand_tokens(tokens, 77), vec!["echo", "77", "x77y"]);
    }

    proptest! {
        #[test]
        fn marker_free_tokens_are_unchanged(token in "[^$]*") {
            prop_assert_eq!(expand_pid_markers(&token, "123"), token);
        }

        #[test]
        fn no_marker_survives_expansion(token in ".*") {
            let expanded = expand_pid_markers(&token, "123");
            prop_assert!(!expanded.contains("$$"));
        }
    }
}
