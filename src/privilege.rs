use crate::ping_error::{PingError, PingResult};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PrivilegeLevel {
    /// Root, or `CAP_NET_RAW` in the effective set.
    Full,
    Unprivileged,
}

/// Whether this process may open a raw ICMP socket.
pub fn check() -> PrivilegeLevel {
    level(nix::unistd::geteuid().is_root(), has_net_raw_capability())
}

pub fn check_raw_socket_privilege() -> PingResult<()> {
    match check() {
        PrivilegeLevel::Full => Ok(()),
        PrivilegeLevel::Unprivileged => Err(PingError::fatal_config(
            "root privileges or the CAP_NET_RAW capability are required to open a raw ICMP socket",
        )),
    }
}

fn level(is_root: bool, has_net_raw: bool) -> PrivilegeLevel {
    if is_root || has_net_raw {
        PrivilegeLevel::Full
    } else {
        PrivilegeLevel::Unprivileged
    }
}

#[cfg(target_os = "linux")]
fn has_net_raw_capability() -> bool {
    matches!(caps::has_cap(None, caps::CapSet::Effective, caps::Capability::CAP_NET_RAW), Ok(true))
}

#[cfg(not(target_os = "linux"))]
fn has_net_raw_capability() -> bool {
    false
}
