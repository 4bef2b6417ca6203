//! Binds a child's standard streams per the resolved command.

use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::process::{Command, Stdio};

use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::parse::ParsedCommand;

const NULL_DEVICE: &str = "/dev/null";

/// Apply the command's redirections to a child being built. Opened files
/// move into `Stdio`, so the shell's descriptor is closed once the child
/// owns its duplicate. Backgrounded commands with no explicit target fall
/// back to the null device and never touch the shell's terminal.
pub(crate) fn apply_redirections(
    command: &mut Command,
    cmd: &ParsedCommand,
    background: bool,
) -> ShellResult<()> {
    if let Some(ref path) = cmd.stdin {
        command.stdin(Stdio::from(open_input(path)?));
    } else if background {
        command.stdin(Stdio::from(open_input(NULL_DEVICE)?));
    }

    if let Some(ref path) = cmd.stdout {
        command.stdout(Stdio::from(open_output(path)?));
    } else if background {
        command.stdout(Stdio::from(open_output(NULL_DEVICE)?));
    }

    Ok(())
}

fn open_input(path: &str) -> ShellResult<File> {
    OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|err| open_failure(path, &err))
}

fn open_output(path: &str) -> ShellResult<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
        .map_err(|err| open_failure(path, &err))
}

fn open_failure(path: &str, err: &std::io::Error) -> ShellError {
    ShellError::new(ErrorKind::RedirectionOpen, "No such file or directory exists.")
        .with_context(format!("{path}: {err}"))
}
