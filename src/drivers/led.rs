//! User LED driver.
//!
//! One push-pull GPIO drives the devkit user LED (active HIGH).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the GPIO level via hw_init.
//! On host/test: tracks state in-memory only.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::drivers::hw_init;
use crate::pins;

pub struct UserLed {
    asserted: bool,
}

impl UserLed {
    pub fn new() -> Self {
        Self { asserted: false }
    }

    /// Drive the LED pin to the given level and remember it.
    pub fn set_asserted(&mut self, on: bool) {
        hw_init::gpio_write(pins::USER_LED_GPIO, on);
        self.asserted = on;
    }

    pub fn off(&mut self) {
        self.set_asserted(false);
    }

    pub fn is_asserted(&self) -> bool {
        self.asserted
    }
}

impl Default for UserLed {
    fn default() -> Self {
        Self::new()
    }
}

// The LED doubles as a generic `embedded-hal` output pin; level writes
// cannot fail.

impl ErrorType for UserLed {
    type Error = Infallible;
}

impl OutputPin for UserLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_asserted(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_asserted(true);
        Ok(())
    }
}
