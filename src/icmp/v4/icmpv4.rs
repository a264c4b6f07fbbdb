use super::echo_reply;
use super::TSocket;
use crate::transport::{EchoReplyRecord, Transport};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::{Duration, Instant};

// Large enough for an IPv4 header plus the biggest echo we send.
const RECV_BUFFER_SIZE: usize = 2048;

pub struct IcmpV4<S> {
    socket: S,
}

impl<S> IcmpV4<S>
where
    S: TSocket,
{
    pub fn new(socket: S) -> IcmpV4<S> {
        IcmpV4 { socket }
    }
}

impl<S> Transport for IcmpV4<S>
where
    S: TSocket,
{
    fn send(&mut self, addr: Ipv4Addr, packet: &[u8]) -> io::Result<Instant> {
        // Raw sockets ignore the port.
        let addr: socket2::SockAddr = SocketAddr::V4(SocketAddrV4::new(addr, 0)).into();
        let send_time = Instant::now();
        self.socket.send_to(packet, &addr)?;
        tracing::trace!("sent {} bytes to {:?}", packet.len(), addr.as_socket());
        Ok(send_time)
    }

    fn recv_reply(&mut self, timeout: Duration) -> io::Result<Option<EchoReplyRecord>> {
        let deadline = Instant::now() + timeout;
        let mut buf = [0u8; RECV_BUFFER_SIZE];
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.socket.wait_readable(remaining)? {
                return Ok(None);
            }
            let receive_time = Instant::now();
            let n = self.socket.recv(&mut buf)?;
            let fields = echo_reply::decode(&buf[..n])?;
            if fields.is_echo_reply() {
                return Ok(Some(EchoReplyRecord {
                    receive_time,
                    sequence_number: fields.sequence_number,
                    ttl: fields.ttl,
                }));
            }
            tracing::trace!(
                "ignoring ICMP type {} code {}",
                fields.icmp_type.0,
                fields.icmp_code.0
            );
        }
    }
}
