use crate::icmp::v4::{echo_request, SequenceNumber, Ttl};
use crate::ping_config::PingConfig;
use crate::ping_error::PingError;
use crate::session_stats::SessionStats;
use crate::stop_signal::StopSignal;
use crate::transport::Transport;
use std::net::Ipv4Addr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub enum ProbeOutcome {
    Replied { rtt_ms: f64, sequence_number: SequenceNumber, ttl: Ttl },
    TimedOut { sequence_number: SequenceNumber },
    Errored { sequence_number: SequenceNumber, cause: PingError },
}

impl ProbeOutcome {
    pub fn glyph(&self) -> char {
        match self {
            ProbeOutcome::Replied { .. } => '!',
            ProbeOutcome::TimedOut { .. } | ProbeOutcome::Errored { .. } => '.',
        }
    }
}

/// Sends `count` echo requests one after another and collects the results.
///
/// The session owns its transport; dropping the session closes the socket.
pub struct ProbeSession<T> {
    transport: T,
    config: PingConfig,
    identifier: u16,
    stop: StopSignal,
}

impl<T> ProbeSession<T>
where
    T: Transport,
{
    pub fn new(transport: T, config: PingConfig, identifier: u16, stop: StopSignal) -> Self {
        ProbeSession { transport, config, identifier, stop }
    }

    pub fn config(&self) -> &PingConfig {
        &self.config
    }

    /// Runs the probe loop against `addr`, handing every outcome to
    /// `on_outcome` as soon as it is known.
    ///
    /// Returns early, with whatever was collected, once the stop signal is set.
    pub fn run<F>(&mut self, addr: Ipv4Addr, mut on_outcome: F) -> SessionStats
    where
        F: FnMut(&ProbeOutcome),
    {
        let mut stats = SessionStats::default();
        let mut sequence_number = SequenceNumber::start_value();

        for n in 0..self.config.count() {
            if self.stop.get_should_stop() {
                stats.interrupted = true;
                break;
            }

            let outcome = self.probe(addr, sequence_number);
            stats.record(&outcome, self.config.rapid());
            on_outcome(&outcome);

            if self.stop.get_should_stop() {
                stats.interrupted = true;
                break;
            }
            let is_last = n + 1 == self.config.count();
            if !self.config.rapid() && !is_last && self.stop.wait_timeout(self.config.wait()) {
                stats.interrupted = true;
                break;
            }
            sequence_number = sequence_number.next();
        }

        tracing::debug!(
            "session finished: sent {}, received {}, interrupted {}",
            stats.sent,
            stats.received,
            stats.interrupted
        );
        stats
    }

    fn probe(&mut self, addr: Ipv4Addr, sequence_number: SequenceNumber) -> ProbeOutcome {
        let packet = match echo_request::build(sequence_number, self.identifier, self.config.size()) {
            Ok(packet) => packet,
            Err(cause) => return ProbeOutcome::Errored { sequence_number, cause },
        };

        let send_time = match self.transport.send(addr, &packet) {
            Ok(send_time) => send_time,
            Err(e) => {
                tracing::warn!("icmp_seq {sequence_number}: send failed: {e}");
                return ProbeOutcome::Errored { sequence_number, cause: e.into() };
            }
        };

        let outcome = match self.transport.recv_reply(self.config.reply_timeout()) {
            Ok(Some(reply)) => ProbeOutcome::Replied {
                rtt_ms: duration_to_ms(reply.receive_time.saturating_duration_since(send_time)),
                sequence_number: reply.sequence_number,
                ttl: reply.ttl,
            },
            Ok(None) => ProbeOutcome::TimedOut { sequence_number },
            Err(e) => {
                tracing::warn!("icmp_seq {sequence_number}: receive failed: {e}");
                ProbeOutcome::Errored { sequence_number, cause: e.into() }
            }
        };
        tracing::debug!("icmp_seq {sequence_number}: {outcome:?}");
        outcome
    }
}

#[allow(clippy::cast_precision_loss)]
fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}
