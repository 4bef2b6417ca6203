//! The execution loop: one `run_once` per command line.

use std::env;
use std::io;
use std::path::PathBuf;

use log::debug;
use rustyline::history::DefaultHistory;
use rustyline::{Config, EditMode, Editor};

use crate::background::BackgroundTable;
use crate::builtins::{execute_builtin, is_builtin};
use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::execution::{build_command, run_foreground, spawn_background, ExitOutcome};
use crate::expansion::expand_tokens;
use crate::io_helpers::{emit_line, read_input_line};
use crate::parse::{is_noop, resolve_redirections, split_background, tokenize, ParsedCommand};
use crate::signals;

const PROMPT: &str = ": ";

pub struct ShellState {
    pub editor: Editor<(), DefaultHistory>,
    pub shell_pid: i32,
    pub background: BackgroundTable,
    pub last_status: ExitOutcome,
    pub interactive: bool,
}

pub fn init_state(interactive: bool) -> io::Result<ShellState> {
    let edit_mode = match env::var("MINISH_EDITMODE").ok().as_deref() {
        Some("vi") | Some("VI") => EditMode::Vi,
        _ => EditMode::Emacs,
    };
    let config = Config::builder()
        .auto_add_history(true)
        .edit_mode(edit_mode)
        .build();
    let mut editor: Editor<(), DefaultHistory> =
        Editor::with_config(config).map_err(io::Error::other)?;
    let _ = editor.load_history(&history_path());

    Ok(ShellState {
        editor,
        shell_pid: unsafe { libc::getpid() },
        background: BackgroundTable::default(),
        last_status: ExitOutcome::Exited(0),
        interactive,
    })
}

impl ShellState {
    pub fn save_history(&mut self) {
        let _ = self.editor.save_history(&history_path());
    }
}

fn history_path() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".minish_history")
}

pub fn run_once(state: &mut ShellState) -> io::Result<()> {
    let line = match read_input_line(&mut state.editor, state.interactive, PROMPT)? {
        Some(line) => line,
        None => {
            if state.interactive {
                println!();
            }
            state.save_history();
            std::process::exit(0);
        }
    };

    let tokens = tokenize(&line);
    if is_noop(&tokens) {
        return Ok(());
    }

    let tokens = expand_tokens(tokens, state.shell_pid);
    let (tokens, is_background) = split_background(tokens);
    if tokens.is_empty() {
        return Ok(());
    }

    if is_builtin(tokens.first().map(String::as_str)) {
        // Built-ins see their raw tokens; a redirection operator is an
        // ordinary argument to them.
        let cmd = ParsedCommand {
            args: tokens,
            is_background,
            ..Default::default()
        };
        return execute_builtin(state, &cmd);
    }

    match resolve_redirections(tokens, is_background) {
        Ok(cmd) => run_external(state, &cmd),
        Err(err) => fail_command(state, err),
    }
    Ok(())
}

/// Launch an external command, then sweep the background table. The
/// sweep runs on every path so finished children are reported even when
/// the command itself failed.
fn run_external(state: &mut ShellState, cmd: &ParsedCommand) {
    let background = cmd.is_background && !signals::foreground_only();
    if let Err(err) = launch(state, cmd, background) {
        fail_command(state, err);
    }
    if let Some(outcome) = state.background.reap_finished() {
        state.last_status = outcome;
    }
}

fn launch(state: &mut ShellState, cmd: &ParsedCommand, background: bool) -> ShellResult<()> {
    let mut command = build_command(cmd, background)?;
    if background {
        let pid = spawn_background(&mut command)?;
        state.background.record(pid);
        emit_line(format!("Background process PID is: {pid}."));
    } else {
        state.last_status = run_foreground(&mut command)?;
    }
    Ok(())
}

fn fail_command(state: &mut ShellState, err: ShellError) {
    emit_line(&err.message);
    debug!(
        "job event=abort kind={:?} context={:?}",
        err.kind, err.context
    );
    if err.kind == ErrorKind::Spawn {
        // Process creation itself failed; nothing sane can continue.
        state.save_history();
        std::process::exit(1);
    }
    state.last_status = ExitOutcome::Exited(err.status());
}
