use super::{SequenceNumber, Ttl};
use pnet_packet::icmp::echo_reply::EchoReplyPacket;
use pnet_packet::icmp::{IcmpCode, IcmpType, IcmpTypes};
use pnet_packet::ipv4::Ipv4Packet;
use std::io;

/// Options are never expected on echo replies, so the ICMP message always
/// starts right after a minimal IPv4 header.
pub const IPV4_HEADER_SIZE: usize = 20;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ReplyFields {
    pub icmp_type: IcmpType,
    pub icmp_code: IcmpCode,
    pub sequence_number: SequenceNumber,
    pub ttl: Ttl,
}

impl ReplyFields {
    pub fn is_echo_reply(&self) -> bool {
        self.icmp_type == IcmpTypes::EchoReply && self.icmp_code == IcmpCode::new(0)
    }
}

/// Decodes an IPv4 datagram as read from a raw ICMP socket.
///
/// Fields are returned for any ICMP type; callers check `is_echo_reply`.
pub fn decode(datagram: &[u8]) -> io::Result<ReplyFields> {
    let too_short = || {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("datagram of {} bytes is too short for IPv4 + ICMP headers", datagram.len()),
        )
    };

    let ipv4_packet = Ipv4Packet::new(datagram).ok_or_else(too_short)?;
    let icmp_bytes = datagram.get(IPV4_HEADER_SIZE..).ok_or_else(too_short)?;
    let echo_reply = EchoReplyPacket::new(icmp_bytes).ok_or_else(too_short)?;

    Ok(ReplyFields {
        icmp_type: echo_reply.get_icmp_type(),
        icmp_code: echo_reply.get_icmp_code(),
        sequence_number: echo_reply.get_sequence_number().into(),
        ttl: ipv4_packet.get_ttl().into(),
    })
}
