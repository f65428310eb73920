//! RP2040-specific HAL for the clock firmware
//!
//! Implements the shared `horarium-hal` traits over `embassy-rp` GPIO:
//!
//! - `FlexBus`: the LCD's 8-bit bidirectional data bus on eight `Flex` pins
//!
//! Plain control pins (RS/RW/EN, keypad rows and columns) use `embassy-rp`'s
//! `Output`/`Input` types directly through their `embedded-hal` impls.

#![no_std]

pub mod bus;

pub use bus::FlexBus;
