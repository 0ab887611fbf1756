//! Hardware adapter — bridges real peripherals to the beacon port traits.
//!
//! Owns the [`UserLed`] driver, exposing it through [`SignalPort`], and
//! maps [`DelayPort`] onto the platform's blocking delay.  This is the
//! only module the beacon loop hands its I/O to.  On non-espidf targets
//! the LED driver uses its cfg-gated simulation stub and delays fall back
//! to `std::thread::sleep`.

use crate::app::ports::{DelayPort, SignalPort};
use crate::drivers::led::UserLed;

/// Concrete adapter that combines the board's I/O behind port traits.
pub struct HardwareAdapter {
    led: UserLed,
}

impl HardwareAdapter {
    pub fn new(led: UserLed) -> Self {
        Self { led }
    }

    /// The LED driver, for state inspection.
    pub fn led(&self) -> &UserLed {
        &self.led
    }
}

// ── SignalPort implementation ─────────────────────────────────

impl SignalPort for HardwareAdapter {
    fn assert(&mut self) {
        self.led.set_asserted(true);
    }

    fn deassert(&mut self) {
        self.led.set_asserted(false);
    }
}

// ── DelayPort implementation ──────────────────────────────────

impl DelayPort for HardwareAdapter {
    #[cfg(target_os = "espidf")]
    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
