//! Horarium - Digital Clock Appliance Firmware
//!
//! Main firmware binary for an RP2040-driven desk clock: a two-line
//! character LCD on a parallel bus and a 4x4 key matrix for setting the
//! date and time.
//!
//! Named after the Latin "horarium" - a book of hours - since the whole
//! device exists to keep and show six small fields of time.

#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use horarium_core::calendar::DateTime;
use horarium_core::edit::{EditSession, EditStep, Key};
use horarium_core::render;
use horarium_core::traits::display::{DisplayError, TextDisplay};
use horarium_core::traits::keypad::{KeyScanner, ScanError};
use horarium_drivers::keypad::MatrixKeypad;
use horarium_drivers::lcd::CharacterLcd;
use horarium_hal_rp2040::FlexBus;

use crate::config::{BOOT_DATETIME, TICK_INTERVAL_MS};

mod config;

/// Anything that can stop the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
enum Error {
    Display(DisplayError),
    Scan(ScanError),
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Error::Scan(e)
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Horarium firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // LCD control lines: register select, read/write, enable
    let rs = Output::new(p.PIN_2, Level::Low);
    let rw = Output::new(p.PIN_3, Level::Low);
    let en = Output::new(p.PIN_4, Level::Low);

    // LCD 8-bit data bus, D0 first
    let bus = FlexBus::new([
        Flex::new(p.PIN_6),
        Flex::new(p.PIN_7),
        Flex::new(p.PIN_8),
        Flex::new(p.PIN_9),
        Flex::new(p.PIN_10),
        Flex::new(p.PIN_11),
        Flex::new(p.PIN_12),
        Flex::new(p.PIN_13),
    ]);

    let mut display = CharacterLcd::new(rs, rw, en, bus, Delay);

    // Key matrix: rows driven low one at a time, columns pulled up
    let rows = [
        Output::new(p.PIN_16, Level::High),
        Output::new(p.PIN_17, Level::High),
        Output::new(p.PIN_18, Level::High),
        Output::new(p.PIN_19, Level::High),
    ];
    let cols = [
        Input::new(p.PIN_20, Pull::Up),
        Input::new(p.PIN_21, Pull::Up),
        Input::new(p.PIN_22, Pull::Up),
        Input::new(p.PIN_23, Pull::Up),
    ];
    let mut keypad = MatrixKeypad::new(rows, cols, Delay);

    let error = match display.init() {
        Ok(()) => {
            info!("Display initialized, clock running");
            match run(&mut display, &mut keypad).await {
                Ok(never) => match never {},
                Err(error) => error,
            }
        }
        Err(error) => Error::Display(error),
    };

    // A wedged display or matrix has no recovery path on this board.
    // Leave the fault on the log and park.
    error!("Clock stopped: {}", error);
    loop {
        Timer::after_secs(60).await;
    }
}

/// The clock's single control loop.
///
/// One tick per second: scan the matrix, then either advance the clock
/// or hand the tick to an edit session. Edit mode runs its own inner
/// loop paced by the blink redraw instead of the tick timer.
async fn run<D, K>(display: &mut D, keypad: &mut K) -> Result<Infallible, Error>
where
    D: TextDisplay,
    K: KeyScanner,
{
    let mut dt = BOOT_DATETIME;
    let mut delay = Delay;

    render::draw(&dt, display)?;

    loop {
        Timer::after_millis(TICK_INTERVAL_MS).await;

        let key = keypad.scan()?.and_then(Key::decode);
        if key == Some(Key::EnterEdit) {
            info!("Entering edit mode at {}", dt);
            let mut session = EditSession::new();
            loop {
                let key = keypad.scan()?.and_then(Key::decode);
                if session.step(key, &mut dt, display, &mut delay)? == EditStep::Done {
                    break;
                }
            }
            info!("Edit confirmed, clock set to {}", dt);
            render::draw(&dt, display)?;
        } else {
            // Ticks spent in edit mode are dropped on purpose; the clock
            // resumes from whatever the operator confirmed.
            dt.advance_one_second();
            render::draw(&dt, display)?;
        }
    }
}
