use minish::{expand_tokens, is_noop, parse_background, parse_command, parse_tokens, ErrorKind};

#[test]
fn tokenize_black_box() {
    assert_eq!(
        parse_tokens("echo  hello   world"),
        vec!["echo", "hello", "world"]
    );
}

#[test]
fn blank_and_comment_black_box() {
    assert!(is_noop(&parse_tokens("")));
    assert!(is_noop(&parse_tokens("   \t ")));
    assert!(is_noop(&parse_tokens("# ls -l $$")));
    assert!(!is_noop(&parse_tokens("echo # later hash is literal")));
}

#[test]
fn pid_expansion_black_box() {
    let tokens = expand_tokens(parse_tokens("echo pid$$ $$$"), 4821);
    assert_eq!(tokens, vec!["echo", "pid4821", "4821$"]);
}

#[test]
fn full_command_black_box() {
    let tokens = parse_tokens("sort < in.txt > out.txt &");
    let (tokens, background) = parse_background(tokens);
    assert!(background);
    let cmd = parse_command(tokens, background).unwrap();
    assert!(cmd.is_background);
    assert_eq!(cmd.args, vec!["sort"]);
    assert_eq!(cmd.stdin.as_deref(), Some("in.txt"));
    assert_eq!(cmd.stdout.as_deref(), Some("out.txt"));
}

#[test]
fn malformed_redirection_black_box() {
    let (tokens, background) = parse_background(parse_tokens("ls >"));
    let err = parse_command(tokens, background).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedRedirection);
}
