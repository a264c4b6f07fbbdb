use super::checksum::checksum;
use super::SequenceNumber;
use crate::ping_error::{PingError, PingResult};
use pnet_packet::icmp::echo_request::{EchoRequestPacket, MutableEchoRequestPacket};
use pnet_packet::icmp::{IcmpCode, IcmpTypes};

pub const MIN_PACKET_SIZE: u16 = 64;
pub const MAX_PACKET_SIZE: u16 = 1500;
pub const ICMP_HEADER_SIZE: usize = 8;

const PAYLOAD_FILLER: u8 = b'Q';

pub fn check_packet_size(size: u16) -> PingResult<()> {
    if (MIN_PACKET_SIZE..=MAX_PACKET_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(PingError::fatal_config(format!(
            "packet size must be between {MIN_PACKET_SIZE} and {MAX_PACKET_SIZE} bytes (got {size})"
        )))
    }
}

/// Builds an ICMP Echo Request of exactly `size` bytes (header included).
pub fn build(sequence_number: SequenceNumber, identifier: u16, size: u16) -> PingResult<Vec<u8>> {
    check_packet_size(size)?;

    let mut buf = vec![0u8; usize::from(size)];
    {
        let mut package = MutableEchoRequestPacket::new(&mut buf)
            .ok_or_else(|| PingError::fatal_config("could not create ICMP package"))?;
        package.set_icmp_type(IcmpTypes::EchoRequest);
        package.set_icmp_code(IcmpCode::new(0));
        package.set_checksum(0_u16);
        package.set_identifier(identifier);
        package.set_sequence_number(sequence_number.into());
    }
    buf[EchoRequestPacket::minimum_packet_size()..].fill(PAYLOAD_FILLER);

    let checksum = checksum(&buf);
    MutableEchoRequestPacket::new(&mut buf)
        .ok_or_else(|| PingError::fatal_config("could not create ICMP package"))?
        .set_checksum(checksum);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet_packet::icmp::IcmpPacket;
    use pnet_packet::Packet;

    #[test]
    fn minimum_and_maximum_sizes() {
        for size in [MIN_PACKET_SIZE, 65, 512, MAX_PACKET_SIZE] {
            let packet = build(SequenceNumber::from(0), 0x1234, size).unwrap();
            assert_eq!(usize::from(size), packet.len());
            let request = EchoRequestPacket::new(&packet).unwrap();
            assert_eq!(usize::from(size) - ICMP_HEADER_SIZE, request.payload().len());
        }
    }

    #[test]
    fn out_of_range_sizes_are_fatal() {
        for size in [0, 8, MIN_PACKET_SIZE - 1, MAX_PACKET_SIZE + 1, u16::MAX] {
            let error = build(SequenceNumber::from(0), 0x1234, size).unwrap_err();
            assert!(error.is_fatal());
        }
    }

    #[test]
    fn header_fields_in_network_byte_order() {
        let packet = build(SequenceNumber::from(0x0102), 0xabcd, 64).unwrap();
        assert_eq!(&[8, 0], &packet[..2]);
        assert_eq!(&[0xab, 0xcd], &packet[4..6]);
        assert_eq!(&[0x01, 0x02], &packet[6..8]);
    }

    #[test]
    fn payload_is_filled() {
        let packet = build(SequenceNumber::from(3), 7, 100).unwrap();
        assert!(packet[ICMP_HEADER_SIZE..].iter().all(|&b| b == PAYLOAD_FILLER));
    }

    #[test]
    fn checksum_is_valid() {
        let packet = build(SequenceNumber::from(9), 0x4242, 77).unwrap();
        assert_eq!(0, checksum(&packet));

        let request = EchoRequestPacket::new(&packet).unwrap();
        let expected = pnet_packet::icmp::checksum(&IcmpPacket::new(request.packet()).unwrap());
        assert_eq!(expected, request.get_checksum());
    }

    #[test]
    fn checksum_is_written_at_both_size_limits() {
        for size in [MIN_PACKET_SIZE, MAX_PACKET_SIZE] {
            let packet = build(SequenceNumber::from(1), 0x0101, size).unwrap();
            assert_ne!([0, 0], [packet[2], packet[3]]);
            assert_eq!(0, checksum(&packet));
        }
    }
}
