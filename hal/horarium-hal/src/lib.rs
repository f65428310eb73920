//! Hardware abstraction traits for Horarium
//!
//! Pin-level digital I/O and delays come from `embedded-hal` 1.0; this crate
//! only defines the abstractions that ecosystem lacks, currently the 8-bit
//! bidirectional data bus used by the character-LCD parallel interface.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;

pub use bus::DataBus;
