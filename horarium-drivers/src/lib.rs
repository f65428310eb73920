//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in horarium-core for the clock appliance's two peripherals:
//!
//! - Character LCD over its parallel command/data interface
//! - 4x4 key matrix scanner
//!
//! Both are generic over `embedded-hal` pins and delays (plus the
//! `horarium-hal` data bus) so they can be unit-tested against mocks.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod keypad;
pub mod lcd;
