//! JunOS-style text output.

use crate::probe_session::ProbeOutcome;
use crate::session_stats::SessionStats;
use std::net::Ipv4Addr;

pub fn header_line(host: &str, addr: Ipv4Addr, size: u16) -> String {
    format!("PING {host} ({addr}): {size} data bytes")
}

/// Line printed for one probe in normal mode. Interrupted probes print nothing.
pub fn outcome_line(outcome: &ProbeOutcome, addr: Ipv4Addr, size: u16) -> Option<String> {
    match outcome {
        ProbeOutcome::Replied { rtt_ms, sequence_number, ttl } => Some(format!(
            "{} bytes from {addr}: icmp_seq={sequence_number} ttl={ttl} time={rtt_ms:.3} ms",
            u32::from(size) + 8
        )),
        ProbeOutcome::TimedOut { sequence_number } => Some(format!("Request timeout for icmp_seq {sequence_number}")),
        ProbeOutcome::Errored { cause, .. } if cause.is_interrupted() => None,
        ProbeOutcome::Errored { cause, .. } => Some(format!("Error: {}", cause.message)),
    }
}

pub fn interrupted_line() -> &'static str {
    "--- Ping interrupted by user ---"
}

pub fn statistics_lines(host: &str, stats: &SessionStats) -> Vec<String> {
    let mut lines = vec![String::new(), format!("--- {host} ping statistics ---")];
    match stats.loss_pct() {
        None => lines.push("No packets were transmitted.".to_owned()),
        Some(loss_pct) => {
            lines.push(format!(
                "{} packets transmitted, {} packets received, {loss_pct:.1}% packet loss",
                stats.sent, stats.received
            ));
            if let Some(rt) = stats.round_trip() {
                lines.push(format!("round-trip min/avg/max = {:.3}/{:.3}/{:.3} ms", rt.min, rt.avg, rt.max));
            }
        }
    }
    lines
}
