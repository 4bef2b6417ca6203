//! Spawning external commands and classifying their outcomes.

use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

mod redirection;
mod spawning;

pub use spawning::{build_command, run_foreground, spawn_background};

/// Terminal state of a child, as recorded in `ShellState.last_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Exited(i32),
    Signaled(i32),
}

pub fn outcome_from_status(status: ExitStatus) -> ExitOutcome {
    if let Some(code) = status.code() {
        ExitOutcome::Exited(code)
    } else if let Some(signal) = status.signal() {
        ExitOutcome::Signaled(signal)
    } else {
        ExitOutcome::Exited(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn outcome_from_normal_exit() {
        let status = Command::new("sh").args(["-c", "exit 3"]).status().unwrap();
        assert_eq!(outcome_from_status(status), ExitOutcome::Exited(3));
    }

    #[test]
    fn outcome_from_signal_termination() {
        let status = Command::new("sh")
            .args(["-c", "kill -9 $$"])
            .status()
            .unwrap();
        assert_eq!(outcome_from_status(status), ExitOutcome::Signaled(9));
    }
}
