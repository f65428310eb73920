//! Field-edit interaction
//!
//! Maps raw key codes to meanings and drives the six-field edit session
//! the operator uses to set the clock.

pub mod keys;
pub mod session;

pub use keys::Key;
pub use session::{Cursor, EditSession, EditStep, BLINK_INTERVAL_MS};
