use crate::probe_session::ProbeOutcome;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundTrip {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Counters for one ping invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStats {
    pub sent: u32,
    pub received: u32,
    /// Round-trip times in milliseconds, in the order replies arrived.
    pub rtts: Vec<f64>,
    /// One `!` or `.` per probe. Only filled in rapid mode.
    pub glyphs: String,
    /// Set when the loop was left early because of an interrupt.
    pub interrupted: bool,
}

impl SessionStats {
    pub(crate) fn record(&mut self, outcome: &ProbeOutcome, rapid: bool) {
        self.sent += 1;
        if let ProbeOutcome::Replied { rtt_ms, .. } = outcome {
            self.received += 1;
            self.rtts.push(*rtt_ms);
        }
        if rapid {
            self.glyphs.push(outcome.glyph());
        }
    }

    /// `None` when nothing was sent.
    pub fn loss_pct(&self) -> Option<f64> {
        if self.sent == 0 {
            return None;
        }
        Some(f64::from(self.sent - self.received) / f64::from(self.sent) * 100.0)
    }

    pub fn round_trip(&self) -> Option<RoundTrip> {
        if self.rtts.is_empty() {
            return None;
        }
        let min = self.rtts.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.rtts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        #[allow(clippy::cast_precision_loss)]
        let avg = self.rtts.iter().sum::<f64>() / self.rtts.len() as f64;
        Some(RoundTrip { min, avg, max })
    }
}
