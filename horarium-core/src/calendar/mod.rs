//! Calendar model
//!
//! Date-time value with single-step normalization and fixed-width
//! formatting for the two-row display.

pub mod datetime;
pub mod format;

pub use datetime::{days_in_month, is_leap_year, DateTime, Field};
pub use format::{format_date, format_date_masked, format_time, format_time_masked};
