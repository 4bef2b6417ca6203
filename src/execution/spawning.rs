//! Child process construction and the foreground wait.

use std::io;
use std::os::unix::process::CommandExt;
use std::process::Command;

use log::debug;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::parse::ParsedCommand;

use super::redirection::apply_redirections;
use super::{outcome_from_status, ExitOutcome};

/// Build the child process for an external command. Redirections are
/// opened here, so a bad target aborts before any process exists.
pub fn build_command(cmd: &ParsedCommand, background: bool) -> ShellResult<Command> {
    let program = cmd.args.first().ok_or_else(|| {
        ShellError::new(ErrorKind::ProgramNotFound, "Command not found.")
            .with_context("line contained only redirections")
    })?;
    let mut command = Command::new(program);
    command.args(&cmd.args[1..]);
    apply_redirections(&mut command, cmd, background)?;
    restore_child_signals(&mut command);
    Ok(command)
}

// The shell ignores SIGINT and catches SIGTSTP; neither disposition may
// leak into children. SIGINT returns to default so a foreground command
// can be interrupted from the keyboard; SIGTSTP is ignored so Ctrl-Z
// only ever toggles the shell's mode.
fn restore_child_signals(command: &mut Command) {
    unsafe {
        command.pre_exec(|| {
            let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
            sigaction(Signal::SIGINT, &default)
                .map_err(|err| io::Error::other(err.to_string()))?;
            let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
            sigaction(Signal::SIGTSTP, &ignore)
                .map_err(|err| io::Error::other(err.to_string()))?;
            Ok(())
        });
    }
}

/// Spawn without waiting; the caller records the PID for later reaping.
pub fn spawn_background(command: &mut Command) -> ShellResult<i32> {
    let child = command
        .spawn()
        .map_err(|err| classify_spawn_error(command, &err))?;
    let pid = child.id() as i32;
    debug!("job event=spawn kind=background pid={}", pid);
    Ok(pid)
}

/// Spawn and block until this specific child changes state.
pub fn run_foreground(command: &mut Command) -> ShellResult<ExitOutcome> {
    let mut child = command
        .spawn()
        .map_err(|err| classify_spawn_error(command, &err))?;
    let pid = child.id();
    debug!("job event=spawn kind=foreground pid={}", pid);
    let status = child.wait().map_err(|err| {
        ShellError::new(ErrorKind::Spawn, format!("failed to wait for child: {err}"))
    })?;
    let outcome = outcome_from_status(status);
    debug!("job event=wait pid={} outcome={:?}", pid, outcome);
    Ok(outcome)
}

/// Failed program lookup aborts one command; anything else means the
/// process table itself is broken and is treated as fatal by the loop.
fn classify_spawn_error(command: &Command, err: &io::Error) -> ShellError {
    let program = command.get_program().to_string_lossy();
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            ShellError::new(ErrorKind::ProgramNotFound, "Command not found.")
                .with_context(program.to_string())
        }
        _ => ShellError::new(ErrorKind::Spawn, format!("failed to create process: {err}"))
            .with_context(program.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(parts: &[&str]) -> ParsedCommand {
        ParsedCommand {
            args: parts.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn run_foreground_reports_exit_code() {
        let mut command = build_command(&parsed(&["sh", "-c", "exit 3"]), false).unwrap();
        let outcome = run_foreground(&mut command).unwrap();
        assert_eq!(outcome, ExitOutcome::Exited(3));
    }

    #[test]
    fn run_foreground_reports_signal_termination() {
        let mut command = build_command(&parsed(&["sh", "-c", "kill -9 $$"]), false).unwrap();
        let outcome = run_foreground(&mut command).unwrap();
        assert_eq!(outcome, ExitOutcome::Signaled(9));
    }

    #[test]
    fn unknown_program_is_a_lookup_failure() {
        let mut command =
            build_command(&parsed(&["definitely-not-a-real-command-4821"]), false).unwrap();
        let err = run_foreground(&mut command).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ProgramNotFound);
        assert_eq!(err.message, "Command not found.");
    }

    #[test]
    fn empty_argument_list_has_no_program() {
        let err = build_command(&ParsedCommand::default(), false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ProgramNotFound);
    }

    #[test]
    fn child_sigint_returns_to_default() {
        // The test binary inherits whatever dispositions cargo set up, so
        // assert through behavior: a child that signals itself with
        // SIGINT must die from it.
        let mut command = build_command(&parsed(&["sh", "-c", "kill -2 $$"]), false).unwrap();
        let outcome = run_foreground(&mut command).unwrap();
        assert_eq!(outcome, ExitOutcome::Signaled(2));
    }
}
