//! Hardware capability traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific driver implementations, so the calendar and
//! edit logic can be tested against simulated hardware.

pub mod display;
pub mod keypad;

pub use display::{DisplayError, TextDisplay};
pub use keypad::{KeyCode, KeyScanner, ScanError};
