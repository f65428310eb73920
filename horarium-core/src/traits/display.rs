//! Character display trait

/// Errors that can occur driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// A control or data line could not be driven
    Gpio,
    /// Row/column outside the display geometry
    InvalidPosition,
}

/// Trait for a character-addressed text display
///
/// Abstracts the two-row LCD so rendering logic can run against a
/// simulated display in tests. Implementations may block while the
/// controller is busy; none of these operations time out.
pub trait TextDisplay {
    /// Blank the display and return the cursor to (0, 0).
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the write cursor to `row`/`col` (0-based).
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Write one character at the cursor; the cursor advances.
    fn put_char(&mut self, c: char) -> Result<(), DisplayError>;

    /// Write a string starting at the cursor.
    fn put_str(&mut self, s: &str) -> Result<(), DisplayError> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }
}
