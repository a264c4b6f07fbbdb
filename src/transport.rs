use crate::icmp::v4::{SequenceNumber, Ttl};
use std::io;
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EchoReplyRecord {
    pub receive_time: Instant,
    pub sequence_number: SequenceNumber,
    pub ttl: Ttl,
}

/// Sends prebuilt echo requests and waits for echo replies.
///
/// `ProbeSession` only talks to the network through this trait.
pub trait Transport {
    /// Sends `packet` to `addr` and returns the instant it was handed to the OS.
    fn send(&mut self, addr: Ipv4Addr, packet: &[u8]) -> io::Result<Instant>;

    /// Waits at most `timeout` for the next echo reply. Other ICMP traffic is
    /// dropped without restarting the clock. `Ok(None)` means timeout.
    fn recv_reply(&mut self, timeout: Duration) -> io::Result<Option<EchoReplyRecord>>;
}
