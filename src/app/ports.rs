//! Port traits — the boundary between the timing core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SosBeacon (domain)
//! ```
//!
//! Driven adapters (the LED, the platform delay) implement these traits.
//! The [`SosBeacon`](super::beacon::SosBeacon) consumes them via generics,
//! so the timing core never touches hardware directly and tests can
//! substitute a simulated pin and a virtual clock.

// ───────────────────────────────────────────────────────────────
// Signal port (driven adapter: domain → output pin)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the beacon drives its output pin through this.
pub trait SignalPort {
    /// Drive the pin to logic-high.
    fn assert(&mut self);

    /// Drive the pin to logic-low.
    fn deassert(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Delay port (driven adapter: domain → platform clock)
// ───────────────────────────────────────────────────────────────

/// Blocking delay port.
///
/// Implementations block the calling thread for *at least* the requested
/// duration.  Test doubles advance a virtual clock instead of sleeping,
/// which makes the full pattern trace verifiable in microseconds of
/// wall time.
pub trait DelayPort {
    /// Block the calling thread for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
