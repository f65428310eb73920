//! Board-agnostic core logic for the clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Calendar model (date-time value, normalization, formatting)
//! - Field-edit state machine driven by decoded key presses
//! - Capability traits the hardware drivers implement (display, keypad)
//! - Two-row rendering of the date and time

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod calendar;
pub mod edit;
pub mod render;
pub mod traits;
