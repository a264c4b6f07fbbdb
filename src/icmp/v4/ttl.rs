/// Time-to-live of a received echo reply, read from its IPv4 header.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Ttl(pub u8);

impl From<u8> for Ttl {
    fn from(hops: u8) -> Self {
        Ttl(hops)
    }
}

impl std::fmt::Display for Ttl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
