//! Signal dispositions for the shell and the foreground-only mode flag.
//!
//! SIGTSTP flips `FOREGROUND_ONLY` from an asynchronous handler; the
//! main loop only ever reads the flag, so no lock exists anywhere. The
//! handler runs with every other signal masked and restricts itself to
//! atomic operations and raw `write(2)`.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

static FOREGROUND_ONLY: AtomicBool = AtomicBool::new(false);

const ENTERING_BANNER: &[u8] = b"\nEntering foreground only mode . . .\n: ";
const EXITING_BANNER: &[u8] = b"\nExiting foreground only mode . . .\n: ";

/// Whether `&` suffixes are currently ignored.
pub fn foreground_only() -> bool {
    FOREGROUND_ONLY.load(Ordering::SeqCst)
}

/// Install the shell's dispositions: SIGINT ignored, SIGTSTP toggles
/// foreground-only mode. Children undo both before exec.
pub fn install_signal_handlers() -> io::Result<()> {
    let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::SA_RESTART, SigSet::empty());
    install_action(Signal::SIGINT, &ignore)?;
    let toggle = SigAction::new(
        SigHandler::Handler(toggle_foreground_mode),
        SaFlags::SA_RESTART,
        SigSet::all(),
    );
    install_action(Signal::SIGTSTP, &toggle)?;
    debug!("signal event=install sigint=ignore sigtstp=toggle");
    Ok(())
}

extern "C" fn toggle_foreground_mode(_signal: libc::c_int) {
    let entering = !FOREGROUND_ONLY.load(Ordering::SeqCst);
    FOREGROUND_ONLY.store(entering, Ordering::SeqCst);
    let banner = if entering {
        ENTERING_BANNER
    } else {
        EXITING_BANNER
    };
    unsafe {
        libc::write(libc::STDOUT_FILENO, banner.as_ptr().cast(), banner.len());
    }
}

fn install_action(signal: Signal, action: &SigAction) -> io::Result<()> {
    unsafe { sigaction(signal, action) }
        .map(|_| ())
        .map_err(|err| io::Error::other(err.to_string()))
}
