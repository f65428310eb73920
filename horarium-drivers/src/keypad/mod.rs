//! 4x4 key matrix scanner

pub mod matrix;

pub use matrix::{MatrixKeypad, MATRIX_COLS, MATRIX_ROWS};
