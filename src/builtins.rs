//! Built-in commands run inside the shell process.

use std::env;
use std::io;
use std::path::Path;

use log::debug;

use crate::execution::ExitOutcome;
use crate::io_helpers::emit_line;
use crate::parse::ParsedCommand;
use crate::repl::ShellState;

pub fn is_builtin(cmd: Option<&str>) -> bool {
    matches!(cmd, Some("exit" | "cd" | "status"))
}

/// Dispatch on the first token verbatim. Built-ins ignore redirection
/// operators and are never backgrounded; the `&` suffix only matters to
/// `status`.
pub fn execute_builtin(state: &mut ShellState, cmd: &ParsedCommand) -> io::Result<()> {
    match cmd.args.first().map(String::as_str) {
        Some("exit") => execute_exit(state),
        Some("cd") => {
            // A failed cd is silent.
            let _ = change_directory(cmd.args.get(1).map(String::as_str));
            Ok(())
        }
        Some("status") => {
            report_status(state, cmd.is_background);
            Ok(())
        }
        _ => Ok(()),
    }
}

fn execute_exit(state: &mut ShellState) -> io::Result<()> {
    state.background.terminate_all();
    state.save_history();
    debug!("shell event=exit code=0");
    std::process::exit(0);
}

/// Change the shell's working directory; bare `cd` targets `$HOME`.
/// Kept separate from dispatch so a reporting variant can slot in
/// without touching it.
fn change_directory(target: Option<&str>) -> io::Result<()> {
    let target = match target {
        Some(path) => path.to_string(),
        None => env::var("HOME").map_err(io::Error::other)?,
    };
    env::set_current_dir(Path::new(&target))
}

fn report_status(state: &mut ShellState, is_background: bool) {
    if is_background {
        // A backgrounded status forces a synthetic signal outcome.
        state.last_status = ExitOutcome::Signaled(1);
        emit_line("Exit value: 1.");
        return;
    }
    emit_line(format_status(state.last_status));
}

/// Signal terminations reuse the "Exit value" label.
pub fn format_status(outcome: ExitOutcome) -> String {
    match outcome {
        ExitOutcome::Exited(code) => format!("Exit value: {code}."),
        ExitOutcome::Signaled(signal) => format!("Terminated by signal. Exit value: {signal}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn recognizes_the_three_builtins() {
        assert!(is_builtin(Some("exit")));
        assert!(is_builtin(Some("cd")));
        assert!(is_builtin(Some("status")));
        assert!(!is_builtin(Some("echo")));
        assert!(!is_builtin(None));
    }

    #[test]
    fn status_formats_exit_and_signal_outcomes() {
        assert_eq!(format_status(ExitOutcome::Exited(3)), "Exit value: 3.");
        assert_eq!(
            format_status(ExitOutcome::Signaled(9)),
            "Terminated by signal. Exit value: 9."
        );
    }

    #[test]
    #[serial]
    fn change_directory_moves_the_shell() {
        let original = env::current_dir().unwrap();
        let dir = tempdir().unwrap();
        change_directory(Some(&dir.path().display().to_string())).unwrap();
        let cwd = env::current_dir().unwrap();
        assert_eq!(cwd.canonicalize().unwrap(), dir.path().canonicalize().unwrap());
        env::set_current_dir(original).unwrap();
    }

    #[test]
    #[serial]
    fn change_directory_reports_missing_target() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent");
        assert!(change_directory(Some(&missing.display().to_string())).is_err());
    }
}
