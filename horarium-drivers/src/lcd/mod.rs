//! Character LCD display link

pub mod hd44780;

pub use hd44780::{CharacterLcd, LCD_COLS, LCD_ROWS};
