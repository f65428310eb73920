//! LCD data bus on RP2040 GPIO
//!
//! Eight `Flex` pins make up the bidirectional data port. Direction is
//! switched per transfer: `write` drives all lines, `read` releases them
//! to inputs before sampling so the LCD controller can drive the bus.

use embassy_rp::gpio::{Flex, Pull};
use horarium_hal::DataBus;

/// 8-bit data bus over `Flex` pins, index 0 = D0.
pub struct FlexBus<'d> {
    pins: [Flex<'d>; 8],
}

impl<'d> FlexBus<'d> {
    /// Take ownership of the eight data pins, released to input.
    pub fn new(mut pins: [Flex<'d>; 8]) -> Self {
        for pin in &mut pins {
            pin.set_pull(Pull::None);
            pin.set_as_input();
        }
        Self { pins }
    }
}

impl DataBus for FlexBus<'_> {
    fn write(&mut self, byte: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            // Latch the level before enabling the output driver so the
            // bus never glitches through a stale value.
            if byte & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
            pin.set_as_output();
        }
    }

    fn read(&mut self) -> u8 {
        let mut value = 0;
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_as_input();
            if pin.is_high() {
                value |= 1 << bit;
            }
        }
        value
    }
}
