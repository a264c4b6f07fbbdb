use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use std::io;
use std::os::raw::c_int;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

const WAIT_SLICE: Duration = Duration::from_millis(50);

static SIGINT_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Cancellation flag checked by `ProbeSession` between probes.
#[derive(Clone, Debug, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn get_should_stop(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sleeps for `timeout` unless stopped first. Returns whether stop was requested.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.get_should_stop() {
                return true;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            std::thread::sleep(remaining.min(WAIT_SLICE));
        }
    }
}

extern "C" fn on_sigint(_signum: c_int) {
    // Only an atomic store: anything else is not async-signal-safe.
    if let Some(flag) = SIGINT_FLAG.get() {
        flag.store(true, Ordering::SeqCst);
    }
}

/// Routes SIGINT to `stop`. Can be installed once per process.
///
/// `SA_RESTART` is left off so that a blocking `poll` returns `EINTR`.
pub fn install_sigint_handler(stop: &StopSignal) -> io::Result<()> {
    if SIGINT_FLAG.set(stop.flag.clone()).is_err() {
        return Err(io::Error::new(io::ErrorKind::AlreadyExists, "SIGINT handler already installed"));
    }

    let action = SigAction::new(SigHandler::Handler(on_sigint), SaFlags::empty(), SigSet::empty());
    // SAFETY: the handler only stores to an atomic, which is async-signal-safe.
    unsafe { sigaction(Signal::SIGINT, &action) }?;
    tracing::trace!("SIGINT handler installed");
    Ok(())
}
