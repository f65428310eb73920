//! Two-row date/time rendering
//!
//! Both normal mode and edit mode draw the same layout: date on row 0,
//! time on row 1. Edit mode additionally draws a masked frame where the
//! selected field is blanked out.

use crate::calendar::{format_date, format_date_masked, format_time, format_time_masked, DateTime, Field};
use crate::traits::display::{DisplayError, TextDisplay};

/// Draw the full date and time.
pub fn draw<D: TextDisplay>(dt: &DateTime, display: &mut D) -> Result<(), DisplayError> {
    display.set_cursor(0, 0)?;
    display.put_str(&format_date(dt))?;
    display.set_cursor(1, 0)?;
    display.put_str(&format_time(dt))
}

/// Draw the date and time with `hidden` replaced by underscores.
pub fn draw_masked<D: TextDisplay>(
    dt: &DateTime,
    hidden: Field,
    display: &mut D,
) -> Result<(), DisplayError> {
    display.set_cursor(0, 0)?;
    display.put_str(&format_date_masked(dt, hidden))?;
    display.set_cursor(1, 0)?;
    display.put_str(&format_time_masked(dt, hidden))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    /// Display double that records rows of text.
    #[derive(Default)]
    struct FakeDisplay {
        rows: [String; 2],
        cursor: (u8, u8),
    }

    impl TextDisplay for FakeDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.rows = [String::new(), String::new()];
            self.cursor = (0, 0);
            Ok(())
        }

        fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
            if row > 1 {
                return Err(DisplayError::InvalidPosition);
            }
            self.cursor = (row, col);
            Ok(())
        }

        fn put_char(&mut self, c: char) -> Result<(), DisplayError> {
            let (row, col) = self.cursor;
            let line = &mut self.rows[row as usize];
            while line.len() < col as usize {
                line.push(' ');
            }
            if (col as usize) < line.len() {
                line.remove(col as usize);
            }
            line.insert(col as usize, c);
            self.cursor = (row, col + 1);
            Ok(())
        }

    }

    const T: DateTime = DateTime {
        year: 2024,
        month: 12,
        day: 31,
        hour: 23,
        minute: 59,
        second: 58,
    };

    #[test]
    fn draw_fills_both_rows() {
        let mut display = FakeDisplay::default();
        draw(&T, &mut display).unwrap();
        assert_eq!(display.rows[0], "12-31-2024");
        assert_eq!(display.rows[1], "23:59:58");
    }

    #[test]
    fn masked_draw_blanks_only_the_hidden_field() {
        let mut display = FakeDisplay::default();
        draw_masked(&T, Field::Minute, &mut display).unwrap();
        assert_eq!(display.rows[0], "12-31-2024");
        assert_eq!(display.rows[1], "23:__:58");
    }
}
