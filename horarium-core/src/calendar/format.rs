//! Fixed-width text for the two display rows
//!
//! Row 0 carries the date as `MM-DD-YYYY`, row 1 the time as `HH:MM:SS`,
//! all zero-padded. The masked variants substitute underscores for one
//! field and are used by the edit-mode blink redraw.

use core::fmt::Write;

use heapless::String;

use super::datetime::{DateTime, Field};

/// Characters in the date row.
pub const DATE_WIDTH: usize = 10;

/// Characters in the time row.
pub const TIME_WIDTH: usize = 8;

/// `MM-DD-YYYY`.
pub fn format_date(dt: &DateTime) -> String<DATE_WIDTH> {
    let mut s = String::new();
    let _ = write!(s, "{:02}-{:02}-{:04}", dt.month, dt.day, dt.year);
    s
}

/// `HH:MM:SS`.
pub fn format_time(dt: &DateTime) -> String<TIME_WIDTH> {
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", dt.hour, dt.minute, dt.second);
    s
}

/// Date row with `hidden` replaced by underscores of matching width.
///
/// Time-of-day fields leave the date row untouched.
pub fn format_date_masked(dt: &DateTime, hidden: Field) -> String<DATE_WIDTH> {
    let mut s = String::new();
    let _ = match hidden {
        Field::Month => write!(s, "__-{:02}-{:04}", dt.day, dt.year),
        Field::Day => write!(s, "{:02}-__-{:04}", dt.month, dt.year),
        Field::Year => write!(s, "{:02}-{:02}-____", dt.month, dt.day),
        _ => write!(s, "{:02}-{:02}-{:04}", dt.month, dt.day, dt.year),
    };
    s
}

/// Time row with `hidden` replaced by underscores of matching width.
///
/// Date fields leave the time row untouched.
pub fn format_time_masked(dt: &DateTime, hidden: Field) -> String<TIME_WIDTH> {
    let mut s = String::new();
    let _ = match hidden {
        Field::Hour => write!(s, "__:{:02}:{:02}", dt.minute, dt.second),
        Field::Minute => write!(s, "{:02}:__:{:02}", dt.hour, dt.second),
        Field::Second => write!(s, "{:02}:{:02}:__", dt.hour, dt.minute),
        _ => write!(s, "{:02}:{:02}:{:02}", dt.hour, dt.minute, dt.second),
    };
    s
}
