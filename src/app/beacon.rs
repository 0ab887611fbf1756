//! Signal generator — the timing core.
//!
//! [`SosBeacon`] drives one output pin through the fixed S-O-S sequence
//! using blocking delays.  All I/O flows through port traits injected at
//! call sites, making the entire sequence testable with mock adapters.
//!
//! ```text
//!                ┌────────────────────────┐ ──▶ SignalPort
//!  BeaconConfig  │        SosBeacon        │
//!                │  dot · dash · gaps      │ ──▶ DelayPort
//!                └────────────────────────┘
//! ```
//!
//! There is no state machine here beyond the pin level itself: the pattern
//! is a straight-line sequence of writes and delays, and the pin is always
//! deasserted when any public operation returns.

use log::{debug, info};

use crate::config::BeaconConfig;

use super::ports::{DelayPort, SignalPort};

// ───────────────────────────────────────────────────────────────
// SosBeacon
// ───────────────────────────────────────────────────────────────

/// The SOS signal generator.
pub struct SosBeacon {
    config: BeaconConfig,
}

impl SosBeacon {
    /// Construct the beacon from timing configuration.
    pub fn new(config: BeaconConfig) -> Self {
        Self { config }
    }

    // ── Symbols ───────────────────────────────────────────────

    /// Emit one dot: assert for `dot_ms`, then the inter-symbol gap.
    ///
    /// The `io` parameter satisfies **both** [`SignalPort`] and
    /// [`DelayPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn emit_dot(&self, io: &mut (impl SignalPort + DelayPort)) {
        self.pulse(self.config.dot_ms, io);
    }

    /// Emit one dash: assert for `dash_ms`, then the inter-symbol gap.
    pub fn emit_dash(&self, io: &mut (impl SignalPort + DelayPort)) {
        self.pulse(self.config.dash_ms, io);
    }

    fn pulse(&self, hold_ms: u32, io: &mut (impl SignalPort + DelayPort)) {
        io.assert();
        io.delay_ms(hold_ms);
        io.deassert();
        io.delay_ms(self.config.symbol_gap_ms);
    }

    // ── Pattern ───────────────────────────────────────────────

    /// Emit one full S-O-S pattern, ending with the inter-word gap.
    ///
    /// Nine pulses total: three dots, the letter gap, three dashes, the
    /// letter gap, three dots, the word gap.  No state is carried between
    /// calls — repeated invocations produce identical traces.
    pub fn run_pattern_once(&self, io: &mut (impl SignalPort + DelayPort)) {
        // S
        for _ in 0..3 {
            self.emit_dot(io);
        }
        io.delay_ms(self.config.letter_gap_ms);

        // O
        for _ in 0..3 {
            self.emit_dash(io);
        }
        io.delay_ms(self.config.letter_gap_ms);

        // S
        for _ in 0..3 {
            self.emit_dot(io);
        }
        io.delay_ms(self.config.word_gap_ms);
    }

    /// Repeat the pattern indefinitely.  Never returns.
    pub fn run_pattern_forever(&self, io: &mut (impl SignalPort + DelayPort)) -> ! {
        info!("Beacon loop started (dot unit {} ms)", self.config.dot_ms);
        loop {
            self.run_pattern_once(io);
            debug!("pattern cycle complete");
        }
    }
}
