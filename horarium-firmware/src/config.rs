//! Firmware configuration
//!
//! Board wiring lives in `main.rs` next to the peripheral setup; this
//! module holds the behavioral constants.

use horarium_core::calendar::DateTime;

/// Clock tick period while the clock is running normally.
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Value the clock shows at power-up until the operator sets it.
///
/// Deliberately a leap-day second about to roll over, so a bench check
/// of a freshly flashed board exercises the calendar cascade.
pub const BOOT_DATETIME: DateTime = DateTime {
    year: 2024,
    month: 2,
    day: 29,
    hour: 23,
    minute: 59,
    second: 50,
};
