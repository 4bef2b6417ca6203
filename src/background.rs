//! Bookkeeping for backgrounded children.
//!
//! The table is polled without blocking after every external command.
//! Entries leave the table as soon as their exit is observed; whatever
//! still runs when the shell exits gets a best-effort SIGTERM.

use log::debug;
use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;

use crate::execution::ExitOutcome;
use crate::io_helpers::emit_line;

#[derive(Default)]
pub struct BackgroundTable {
    pids: Vec<i32>,
}

impl BackgroundTable {
    pub fn record(&mut self, pid: i32) {
        self.pids.push(pid);
    }

    /// Poll every entry without blocking; report and drop the finished
    /// ones. Returns the outcome of the last child reaped so the caller
    /// can fold it into `last_status`.
    pub fn reap_finished(&mut self) -> Option<ExitOutcome> {
        let mut last = None;
        self.pids.retain(|&pid| match poll_child(pid) {
            Some(outcome) => {
                debug!("job event=reap pid={} outcome={:?}", pid, outcome);
                match outcome {
                    ExitOutcome::Exited(code) => emit_line(format!(
                        "Background process PID {pid} has finished with exit status: {code}."
                    )),
                    ExitOutcome::Signaled(signal) => emit_line(format!(
                        "Background process PID {pid} was terminated by signal: {signal}."
                    )),
                }
                last = Some(outcome);
                false
            }
            None => true,
        });
        last
    }

    /// Request termination of everything still running; used by `exit`.
    /// The signal is best-effort and not wait-confirmed.
    pub fn terminate_all(&mut self) {
        for &pid in &self.pids {
            if poll_child(pid).is_none() {
                debug!("job event=terminate pid={}", pid);
                let _ = kill(Pid::from_raw(pid), Signal::SIGTERM);
            }
        }
        self.pids.clear();
    }
}

fn poll_child(pid: i32) -> Option<ExitOutcome> {
    loop {
        match waitpid(Pid::from_raw(pid), Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::Exited(_, code)) => return Some(ExitOutcome::Exited(code)),
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                return Some(ExitOutcome::Signaled(signal as i32))
            }
            Ok(WaitStatus::StillAlive) => return None,
            Ok(_) => continue,
            Err(Errno::EINTR) => continue,
            // Already reaped elsewhere; count the entry as finished.
            Err(Errno::ECHILD) => return Some(ExitOutcome::Exited(0)),
            Err(err) => {
                debug!("job event=poll pid={} error={}", pid, err);
                return None;
            }
        }
    }
}
