use super::TSocket;
use nix::poll::{poll, PollFd, PollFlags};
use socket2::{Domain, Protocol, Type};
use std::io::{self, Read};
use std::os::raw::c_int;
use std::os::unix::prelude::{AsRawFd, RawFd};
use std::time::Duration;

/// Raw ICMPv4 socket. Needs root or `CAP_NET_RAW`.
///
/// The descriptor is closed when the value is dropped.
pub struct RawSocket {
    socket: socket2::Socket,
}

impl RawSocket {
    pub fn create() -> Result<Self, io::Error> {
        tracing::trace!("creating RawSocket");
        let socket = socket2::Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4))?;
        Ok(RawSocket { socket })
    }
}

impl Drop for RawSocket {
    fn drop(&mut self) {
        tracing::trace!("closing RawSocket");
    }
}

impl TSocket for RawSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize> {
        self.socket.send_to(buf, addr)
    }

    fn wait_readable(&self, timeout: Duration) -> io::Result<bool> {
        wait_readable_fd(self.socket.as_raw_fd(), timeout)
    }

    fn recv(&self, buf: &mut [u8]) -> io::Result<usize> {
        // On a RAW socket we get the whole IP packet.
        (&self.socket).read(buf)
    }
}

fn wait_readable_fd(fd: RawFd, timeout: Duration) -> io::Result<bool> {
    let mut fds = [PollFd::new(fd, PollFlags::POLLIN)];
    let ready = poll(&mut fds, poll_timeout_ms(timeout))?;
    Ok(ready > 0)
}

// Rounds up so that a sub-millisecond remainder still waits instead of spinning.
fn poll_timeout_ms(timeout: Duration) -> c_int {
    c_int::try_from(timeout.as_nanos().div_ceil(1_000_000)).unwrap_or(c_int::MAX)
}
