mod checksum;
pub mod echo_reply;
pub mod echo_request;
mod icmpv4;
mod sequence_number;
mod socket;
mod ttl;

pub use checksum::checksum;
pub use echo_reply::{decode, ReplyFields};
pub use echo_request::build;
pub use icmpv4::IcmpV4;
pub use sequence_number::SequenceNumber;
pub use socket::raw_socket::RawSocket;
pub use socket::TSocket;
pub use ttl::Ttl;
