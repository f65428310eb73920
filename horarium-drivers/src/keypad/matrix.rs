//! Key matrix scan routine
//!
//! Four row lines are driven one at a time and four column lines sampled.
//! Columns carry pull-ups and a pressed key pulls its column down to the
//! active row, so "active" reads low on both sides. The first closed
//! (row, col) in row-major order wins; simultaneous closures and bounce
//! are not this driver's problem - the polling cadence masks them.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use horarium_core::traits::keypad::{KeyCode, KeyScanner, ScanError};

/// Matrix rows.
pub const MATRIX_ROWS: usize = 4;

/// Matrix columns.
pub const MATRIX_COLS: usize = 4;

/// Settle time after driving a row before its columns are sampled.
const SETTLE_US: u32 = 1_000;

/// 4x4 matrix keypad over row outputs and column inputs.
pub struct MatrixKeypad<R, C, D> {
    rows: [R; MATRIX_ROWS],
    cols: [C; MATRIX_COLS],
    delay: D,
}

impl<R, C, D> MatrixKeypad<R, C, D>
where
    R: OutputPin,
    C: InputPin,
    D: DelayNs,
{
    /// Take ownership of the matrix lines. Rows idle inactive (high).
    pub fn new(rows: [R; MATRIX_ROWS], cols: [C; MATRIX_COLS], delay: D) -> Self {
        Self { rows, cols, delay }
    }

    /// Drive exactly row `active` low, all others high.
    fn select_row(&mut self, active: usize) -> Result<(), ScanError> {
        for (index, row) in self.rows.iter_mut().enumerate() {
            if index == active {
                row.set_low().map_err(|_| ScanError::Gpio)?;
            } else {
                row.set_high().map_err(|_| ScanError::Gpio)?;
            }
        }
        Ok(())
    }

    /// Return all rows to their inactive level.
    fn release_rows(&mut self) -> Result<(), ScanError> {
        for row in &mut self.rows {
            row.set_high().map_err(|_| ScanError::Gpio)?;
        }
        Ok(())
    }
}

impl<R, C, D> KeyScanner for MatrixKeypad<R, C, D>
where
    R: OutputPin,
    C: InputPin,
    D: DelayNs,
{
    fn scan(&mut self) -> Result<Option<KeyCode>, ScanError> {
        for row in 0..MATRIX_ROWS {
            self.select_row(row)?;
            self.delay.delay_us(SETTLE_US);
            for col in 0..MATRIX_COLS {
                let pressed = self.cols[col].is_low().map_err(|_| ScanError::Gpio)?;
                if pressed {
                    self.release_rows()?;
                    return Ok(KeyCode::from_position(row as u8, col as u8));
                }
            }
        }
        self.release_rows()?;
        Ok(None)
    }
}
