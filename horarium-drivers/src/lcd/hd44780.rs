//! HD44780-class parallel display link
//!
//! Drives the controller's 8-bit command/data interface: three control
//! lines (register select, read/write, enable) plus the bidirectional
//! data bus. Every byte is preceded by a busy-flag poll, the read cycle
//! the controller uses to signal it has finished its previous operation.
//!
//! The busy poll has no timeout. A controller that never comes ready
//! blocks the caller forever; the appliance has no recovery path and no
//! other error channel, so this is the documented behavior.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use horarium_core::traits::display::{DisplayError, TextDisplay};
use horarium_hal::DataBus;

/// Display rows.
pub const LCD_ROWS: u8 = 2;

/// Display columns.
pub const LCD_COLS: u8 = 16;

/// DDRAM address distance between row starts.
const ROW_STRIDE: u8 = 40;

/// Busy flag, bit 7 of a status read.
const BUSY_FLAG: u8 = 0x80;

/// Enable-line settle time during a read or write cycle.
const ENABLE_PULSE_NS: u32 = 700;

// Controller command set (the subset this driver uses).
const CMD_CLEAR: u8 = 0x01;
const CMD_RETURN_HOME: u8 = 0x02;
const CMD_ENTRY_MODE: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_SHIFT_CURSOR_RIGHT: u8 = 0x14;
const CMD_FUNCTION_SET: u8 = 0x3C;
const CMD_WAKE: u8 = 0x30;

/// Parallel character-LCD driver.
///
/// Generic over the three control pins, the data bus, and the delay
/// source so the protocol can be tested against mocks.
pub struct CharacterLcd<RS, RW, EN, B, D> {
    rs: RS,
    rw: RW,
    en: EN,
    bus: B,
    delay: D,
}

impl<RS, RW, EN, B, D> CharacterLcd<RS, RW, EN, B, D>
where
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
    B: DataBus,
    D: DelayNs,
{
    /// Wrap the wires. Call [`init`](Self::init) before anything else.
    pub fn new(rs: RS, rw: RW, en: EN, bus: B, delay: D) -> Self {
        Self {
            rs,
            rw,
            en,
            bus,
            delay,
        }
    }

    /// One raw write cycle: register select, RW low, drive bus, pulse EN.
    ///
    /// Does not check the busy flag; only `init` uses this directly, for
    /// the wake-up commands sent while the controller cannot yet report
    /// busy status.
    fn write_cycle(&mut self, byte: u8, is_data: bool) -> Result<(), DisplayError> {
        self.select_register(is_data)?;
        self.rw.set_low().map_err(|_| DisplayError::Gpio)?;
        self.bus.write(byte);
        self.en.set_high().map_err(|_| DisplayError::Gpio)?;
        self.delay.delay_ns(ENABLE_PULSE_NS);
        self.en.set_low().map_err(|_| DisplayError::Gpio)
    }

    /// One raw read cycle of the status register (busy flag + address).
    fn read_status(&mut self) -> Result<u8, DisplayError> {
        self.rs.set_low().map_err(|_| DisplayError::Gpio)?;
        self.rw.set_high().map_err(|_| DisplayError::Gpio)?;
        self.en.set_high().map_err(|_| DisplayError::Gpio)?;
        self.delay.delay_ns(ENABLE_PULSE_NS);
        let status = self.bus.read();
        self.en.set_low().map_err(|_| DisplayError::Gpio)?;
        Ok(status)
    }

    fn select_register(&mut self, is_data: bool) -> Result<(), DisplayError> {
        if is_data {
            self.rs.set_high().map_err(|_| DisplayError::Gpio)
        } else {
            self.rs.set_low().map_err(|_| DisplayError::Gpio)
        }
    }

    /// Send one command or data byte, waiting out the busy flag first.
    ///
    /// Spins until the controller reports ready; unbounded by design.
    pub fn send(&mut self, byte: u8, is_data: bool) -> Result<(), DisplayError> {
        while self.read_status()? & BUSY_FLAG != 0 {}
        self.write_cycle(byte, is_data)
    }

    /// Run the controller's documented power-up sequence.
    ///
    /// The first two wake commands are sent blind with fixed settle
    /// delays because the busy flag is not valid until the controller
    /// has latched its interface width.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(16);
        self.write_cycle(CMD_WAKE, false)?;
        self.delay.delay_ms(5);
        self.write_cycle(CMD_WAKE, false)?;
        self.delay.delay_ms(1);
        self.send(CMD_FUNCTION_SET, false)?;
        self.send(CMD_DISPLAY_ON, false)?;
        self.send(CMD_ENTRY_MODE, false)?;
        self.send(CMD_CLEAR, false)
    }
}

impl<RS, RW, EN, B, D> TextDisplay for CharacterLcd<RS, RW, EN, B, D>
where
    RS: OutputPin,
    RW: OutputPin,
    EN: OutputPin,
    B: DataBus,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(CMD_CLEAR, false)
    }

    /// Return home, then walk the cursor right to the target cell.
    ///
    /// Rows sit 40 DDRAM addresses apart regardless of the visible width.
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= LCD_ROWS || col >= LCD_COLS {
            return Err(DisplayError::InvalidPosition);
        }
        self.send(CMD_RETURN_HOME, false)?;
        for _ in 0..(row * ROW_STRIDE + col) {
            self.send(CMD_SHIFT_CURSOR_RIGHT, false)?;
        }
        Ok(())
    }

    fn put_char(&mut self, c: char) -> Result<(), DisplayError> {
        // The character ROM is ASCII-compatible; anything else degrades.
        let byte = if c.is_ascii() { c as u8 } else { b'?' };
        self.send(byte, true)
    }
}
