use std::{io, time::Duration};

pub(crate) mod raw_socket;

pub trait TSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize>;
    /// Blocks until a datagram can be read or `timeout` elapses.
    /// Returns `false` on timeout.
    fn wait_readable(&self, timeout: Duration) -> io::Result<bool>;
    /// Reads one datagram, IPv4 header included.
    fn recv(&self, buf: &mut [u8]) -> io::Result<usize>;
}
