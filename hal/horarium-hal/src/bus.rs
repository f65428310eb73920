//! Bidirectional parallel data bus
//!
//! HD44780-class LCD controllers expose an 8-bit data port that the host
//! drives during write cycles and samples during status reads. `embedded-hal`
//! has no trait for a pin group that switches direction, so chip HALs
//! implement this one.

/// 8-bit bidirectional data bus
///
/// Implementations own the eight data lines and handle direction switching.
/// A `write` leaves the bus driven; a `read` releases it to input first, so
/// callers never manage direction themselves.
pub trait DataBus {
    /// Drive all eight lines with `byte` (bit 0 = D0).
    fn write(&mut self, byte: u8);

    /// Release the bus to input and sample all eight lines.
    fn read(&mut self) -> u8;
}

impl<T: DataBus + ?Sized> DataBus for &mut T {
    fn write(&mut self, byte: u8) {
        (**self).write(byte);
    }

    fn read(&mut self) -> u8 {
        (**self).read()
    }
}
