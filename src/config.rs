//! Morse timing parameters.
//!
//! All durations the beacon uses, in milliseconds.  `Default` carries the
//! authoritative values: a 150 ms dot unit with the standard morse ratios
//! (dash and letter gap at 3 units, word gap at 7 units).

use serde::{Deserialize, Serialize};

/// Beacon timing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeaconConfig {
    /// Duration the pin is held asserted for a dot.
    pub dot_ms: u32,
    /// Duration the pin is held asserted for a dash.
    pub dash_ms: u32,
    /// Gap after every symbol (dot or dash).
    pub symbol_gap_ms: u32,
    /// Additional gap between letters.
    pub letter_gap_ms: u32,
    /// Gap after the full pattern, before it repeats.
    pub word_gap_ms: u32,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            dot_ms: 150,
            dash_ms: 450,
            symbol_gap_ms: 150,
            letter_gap_ms: 450,
            word_gap_ms: 1050,
        }
    }
}
