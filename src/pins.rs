//! GPIO pin assignments for the beacon board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output: the devkit user LED (active HIGH).
pub const USER_LED_GPIO: i32 = 2;
