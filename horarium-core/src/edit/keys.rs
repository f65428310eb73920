//! Key meanings
//!
//! Only five of the sixteen matrix keys do anything; the rest decode to
//! `None` and are ignored everywhere.

use crate::traits::keypad::KeyCode;

/// Meaning assigned to a matrix key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Enter the field-edit session (normal mode only).
    EnterEdit,
    /// Confirm the edited value and leave the session.
    Confirm,
    /// Add one to the selected field.
    Increase,
    /// Move the cursor to the next field, wrapping after seconds.
    MoveCursor,
    /// Subtract one from the selected field.
    Decrease,
}

impl Key {
    /// Decode a raw matrix code. Unassigned keys decode to `None`.
    pub const fn decode(code: KeyCode) -> Option<Self> {
        match code.get() {
            1 => Some(Key::EnterEdit),
            2 => Some(Key::Confirm),
            3 => Some(Key::Increase),
            4 => Some(Key::MoveCursor),
            7 => Some(Key::Decrease),
            _ => None,
        }
    }
}
