use crate::icmp::v4::echo_request::check_packet_size;
use crate::ping_error::PingResult;
use std::time::Duration;

const REPLY_TIMEOUT: Duration = Duration::from_secs(1);
const RAPID_REPLY_TIMEOUT: Duration = Duration::from_millis(500);

#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, PartialEq)]
pub struct PingConfig {
    count: u16,
    size: u16,
    rapid: bool,
    wait: Duration,
}

impl PingConfig {
    pub fn new(count: u16, size: u16, rapid: bool, wait: Duration) -> PingResult<Self> {
        check_packet_size(size)?;
        Ok(PingConfig { count, size, rapid, wait })
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    /// Echo request size in bytes, ICMP header included. Always within 64..=1500.
    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn rapid(&self) -> bool {
        self.rapid
    }

    /// Pause between probes. Ignored in rapid mode.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn reply_timeout(&self) -> Duration {
        if self.rapid {
            RAPID_REPLY_TIMEOUT
        } else {
            REPLY_TIMEOUT
        }
    }
}

impl Default for PingConfig {
    fn default() -> Self {
        PingConfig { count: 5, size: 64, rapid: false, wait: Duration::from_secs(1) }
    }
}
