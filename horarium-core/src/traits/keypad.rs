//! Key matrix scanner trait

/// Errors that can occur scanning the key matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanError {
    /// A row or column line could not be driven or read
    Gpio,
}

/// Raw key number from a 4x4 matrix, row-major: `4 * row + col + 1`.
///
/// Produced fresh on each scan; never stored. The mapping from codes to
/// meanings lives in [`crate::edit::Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(u8);

impl KeyCode {
    /// Wrap a raw code, rejecting anything outside 1-16.
    pub const fn new(code: u8) -> Option<Self> {
        if code >= 1 && code <= 16 {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Code for the key at `row`/`col` (both 0-3).
    pub const fn from_position(row: u8, col: u8) -> Option<Self> {
        if row < 4 && col < 4 {
            Some(Self(4 * row + col + 1))
        } else {
            None
        }
    }

    /// The raw code, 1-16.
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Trait for detecting a pressed key
///
/// A scan reports the first key found pressed, or `None`. Debounce is the
/// caller's concern: the surrounding polling cadence masks switch bounce.
pub trait KeyScanner {
    /// Perform one full scan of the matrix.
    fn scan(&mut self) -> Result<Option<KeyCode>, ScanError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_range_is_enforced() {
        assert!(KeyCode::new(0).is_none());
        assert!(KeyCode::new(17).is_none());
        assert_eq!(KeyCode::new(16).map(KeyCode::get), Some(16));
    }

    #[test]
    fn position_maps_row_major() {
        assert_eq!(KeyCode::from_position(0, 0).map(KeyCode::get), Some(1));
        assert_eq!(KeyCode::from_position(2, 1).map(KeyCode::get), Some(10));
        assert_eq!(KeyCode::from_position(3, 3).map(KeyCode::get), Some(16));
        assert!(KeyCode::from_position(4, 0).is_none());
    }
}
