//! Edit session state machine
//!
//! A session is a cursor over the six date/time fields. Keys move the
//! cursor or nudge the selected field through the calendar model; every
//! step except the exit ends with a two-phase blink redraw that hides
//! and then restores the selected field.

use embedded_hal::delay::DelayNs;

use crate::calendar::{DateTime, Field};
use crate::edit::keys::Key;
use crate::render;
use crate::traits::display::{DisplayError, TextDisplay};

/// Half-period of the edit-mode blink. Each step shows the masked frame
/// for this long, then the full frame for the same time.
pub const BLINK_INTERVAL_MS: u32 = 200;

/// Editing cursor position, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cursor {
    Month,
    Day,
    Year,
    Hour,
    Minute,
    Second,
}

impl Cursor {
    /// Position a fresh session starts at.
    pub const fn first() -> Self {
        Cursor::Month
    }

    /// Next position, wrapping seconds back to month.
    pub const fn next(self) -> Self {
        match self {
            Cursor::Month => Cursor::Day,
            Cursor::Day => Cursor::Year,
            Cursor::Year => Cursor::Hour,
            Cursor::Hour => Cursor::Minute,
            Cursor::Minute => Cursor::Second,
            Cursor::Second => Cursor::Month,
        }
    }

    /// The calendar field under this cursor.
    pub const fn field(self) -> Field {
        match self {
            Cursor::Month => Field::Month,
            Cursor::Day => Field::Day,
            Cursor::Year => Field::Year,
            Cursor::Hour => Field::Hour,
            Cursor::Minute => Field::Minute,
            Cursor::Second => Field::Second,
        }
    }
}

/// Outcome of one edit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditStep {
    /// Session continues; poll the next key.
    Editing,
    /// Operator confirmed; leave edit mode.
    Done,
}

/// One field-edit session.
///
/// Created on entering edit mode and discarded on exit; nothing persists
/// between sessions beyond the `DateTime` itself.
#[derive(Debug, Clone)]
pub struct EditSession {
    cursor: Cursor,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Start a session with the cursor on the month field.
    pub fn new() -> Self {
        Self {
            cursor: Cursor::first(),
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Apply one decoded key to the session and the clock value.
    ///
    /// This is the pure state transition: no rendering, no delays.
    /// `None` (no key, or an unassigned key) changes nothing.
    pub fn apply(&mut self, key: Option<Key>, dt: &mut DateTime) -> EditStep {
        match key {
            Some(Key::Confirm) => return EditStep::Done,
            Some(Key::MoveCursor) => self.cursor = self.cursor.next(),
            Some(Key::Increase) => dt.increment(self.cursor.field()),
            Some(Key::Decrease) => dt.decrement(self.cursor.field()),
            // EnterEdit only means something outside a session.
            Some(Key::EnterEdit) | None => {}
        }
        EditStep::Editing
    }

    /// Apply one key, then run the blink redraw.
    ///
    /// The blink draws the masked frame, waits half a blink period, draws
    /// the full frame and waits again, so the selected field flashes while
    /// keys are polled at the blink cadence. Exiting skips the redraw.
    pub fn step<D, W>(
        &mut self,
        key: Option<Key>,
        dt: &mut DateTime,
        display: &mut D,
        delay: &mut W,
    ) -> Result<EditStep, DisplayError>
    where
        D: TextDisplay,
        W: DelayNs,
    {
        if let EditStep::Done = self.apply(key, dt) {
            return Ok(EditStep::Done);
        }
        render::draw_masked(dt, self.cursor.field(), display)?;
        delay.delay_ms(BLINK_INTERVAL_MS);
        render::draw(dt, display)?;
        delay.delay_ms(BLINK_INTERVAL_MS);
        Ok(EditStep::Editing)
    }
}
