//! SOS Beacon Firmware — Main Entry Point
//!
//! Bring-up order: ESP-IDF bootstrap → peripheral init → adapter wiring →
//! beacon loop.  The loop never returns; the only observable output is the
//! user LED.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use sos_beacon::adapters::hardware::HardwareAdapter;
use sos_beacon::adapters::time::Esp32TimeAdapter;
use sos_beacon::app::beacon::SosBeacon;
use sos_beacon::config::BeaconConfig;
use sos_beacon::drivers::hw_init;
use sos_beacon::drivers::led::UserLed;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  SOS Beacon v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let time = Esp32TimeAdapter::new();

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters + beacon ────────────────────────
    let mut io = HardwareAdapter::new(UserLed::new());
    let beacon = SosBeacon::new(BeaconConfig::default());

    info!(
        "Bring-up complete in {} ms. Entering beacon loop.",
        time.uptime_us() / 1_000
    );

    // ── 4. Beacon loop ────────────────────────────────────────
    beacon.run_pattern_forever(&mut io)
}
