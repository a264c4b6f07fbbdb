#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub use ping_config::PingConfig;
pub use ping_error::{GenericError, PingError, PingErrorKind, PingResult};
pub use probe_session::{ProbeOutcome, ProbeSession};
pub use session_stats::{RoundTrip, SessionStats};
pub use stop_signal::{install_sigint_handler, StopSignal};
pub use transport::{EchoReplyRecord, Transport};

use icmp::v4::{IcmpV4, RawSocket};

pub mod icmp;
mod ping_config;
mod ping_error;
pub mod privilege;
mod probe_session;
pub mod report;
mod session_stats;
mod stop_signal;
mod transport;
pub mod utils;

/// Opens the raw ICMP socket a session sends and receives on.
pub fn create_raw_transport() -> PingResult<IcmpV4<RawSocket>> {
    match RawSocket::create() {
        Ok(socket) => Ok(IcmpV4::new(socket)),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => Err(PingError::fatal_config(
            "root privileges are required to open a raw ICMP socket",
        )),
        Err(e) => Err(PingError::fatal_config(format!("could not create raw ICMP socket: {e}"))),
    }
}

/// Echo identifier for one session. Stays fixed for every probe in it.
pub fn new_identifier() -> u16 {
    rand::random::<u16>()
}
