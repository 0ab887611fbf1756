//! Mock hardware for integration tests.
//!
//! Records every pin edge with a virtual-clock timestamp so tests can
//! assert on the full signal trace without real GPIO or wall-time sleeps.

use sos_beacon::app::ports::{DelayPort, SignalPort};

// ── RecordingHarness ──────────────────────────────────────────

/// A simulated pin plus virtual clock, implementing both beacon ports.
pub struct RecordingHarness {
    pub now_ms: u64,
    pub level: bool,
    pub edges: Vec<(u64, bool)>,
}

#[allow(dead_code)]
impl RecordingHarness {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            level: false,
            edges: Vec::new(),
        }
    }

    /// Timestamps of assert events, in order.
    pub fn rising_edges(&self) -> Vec<u64> {
        self.edges
            .iter()
            .filter(|(_, level)| *level)
            .map(|(t, _)| *t)
            .collect()
    }

    /// Length of every asserted interval, in order.
    pub fn hold_durations(&self) -> Vec<u64> {
        self.edges
            .windows(2)
            .filter_map(|pair| match pair {
                [(on, true), (off, false)] => Some(off - on),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalPort for RecordingHarness {
    fn assert(&mut self) {
        self.level = true;
        self.edges.push((self.now_ms, true));
    }

    fn deassert(&mut self) {
        self.level = false;
        self.edges.push((self.now_ms, false));
    }
}

impl DelayPort for RecordingHarness {
    fn delay_ms(&mut self, ms: u32) {
        self.now_ms += u64::from(ms);
    }
}
