//! Date-time value and normalization
//!
//! The clock has no RTC; time advances one second per polling-loop tick and
//! the operator adjusts individual fields by single increments or decrements.
//! `normalize` repairs the value after any such single-step mutation.

/// Month lengths for a non-leap year, January first.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule: divisible by 400, or by 4 but not by 100.
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in `month` (1-12) of `year`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

/// The six adjustable date/time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Month,
    Day,
    Year,
    Hour,
    Minute,
    Second,
}

/// A calendar date and time of day.
///
/// Fields are signed so a single decrement can pass one unit below range
/// before `normalize` repairs it. After `normalize` returns, every field is
/// back within its calendar range for the (possibly adjusted) year/month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: i32,
    /// 1-12 once normalized.
    pub month: i8,
    /// 1-31 once normalized, bounded by the month length.
    pub day: i8,
    /// 0-23 once normalized.
    pub hour: i8,
    /// 0-59 once normalized.
    pub minute: i8,
    /// 0-59 once normalized.
    pub second: i8,
}

impl DateTime {
    /// Repair a value whose fields are each at most one unit out of range.
    ///
    /// Overflow/underflow cascades upward exactly one level per violated
    /// field, evaluated second → minute → hour → day → month → year. When a
    /// day borrow crosses a month boundary, the day becomes the last day of
    /// the predecessor month (leap-aware for February).
    ///
    /// This is deliberately *not* a general normalizer: it only corrects the
    /// state left by a single increment, decrement, or one-second advance.
    /// Feeding it a value more than one step out of range produces silently
    /// wrong results, so callers must keep the one-step contract.
    pub fn normalize(&mut self) {
        if self.second > 59 {
            self.second = 0;
            self.minute += 1;
        }
        if self.second < 0 {
            self.second = 59;
            self.minute -= 1;
        }
        if self.minute > 59 {
            self.minute = 0;
            self.hour += 1;
        }
        if self.minute < 0 {
            self.minute = 59;
            self.hour -= 1;
        }
        if self.hour > 23 {
            self.hour = 0;
            self.day += 1;
        }
        if self.hour < 0 {
            self.hour = 23;
            self.day -= 1;
        }
        // Day cascade only once the month is in range; a month that stepped
        // out of range itself is handled below and cannot coincide with an
        // out-of-range day under the one-step contract.
        if (1..=12).contains(&self.month) {
            if self.day > days_in_month(self.year, self.month as u8) as i8 {
                self.day = 1;
                self.month += 1;
            } else if self.day < 1 {
                let (prev_year, prev_month) = if self.month == 1 {
                    (self.year - 1, 12)
                } else {
                    (self.year, (self.month - 1) as u8)
                };
                self.day = days_in_month(prev_year, prev_month) as i8;
                self.month -= 1;
            }
        }
        if self.month > 12 {
            self.month = 1;
            self.year += 1;
        }
        if self.month < 1 {
            self.month = 12;
            self.year -= 1;
        }
    }

    /// Advance the clock by one second.
    pub fn advance_one_second(&mut self) {
        self.second += 1;
        self.normalize();
    }

    /// Add one unit to `field`, then normalize.
    pub fn increment(&mut self, field: Field) {
        self.apply_delta(field, 1);
    }

    /// Subtract one unit from `field`, then normalize.
    pub fn decrement(&mut self, field: Field) {
        self.apply_delta(field, -1);
    }

    fn apply_delta(&mut self, field: Field, delta: i8) {
        match field {
            Field::Month => self.month += delta,
            Field::Day => self.day += delta,
            Field::Year => self.year += delta as i32,
            Field::Hour => self.hour += delta,
            Field::Minute => self.minute += delta,
            Field::Second => self.second += delta,
        }
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dt(year: i32, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> DateTime {
        DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn leap_year_rule() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
    }

    #[test]
    fn advance_across_leap_day_midnight() {
        let mut t = dt(2024, 2, 29, 23, 59, 59);
        t.advance_one_second();
        assert_eq!(t, dt(2024, 3, 1, 0, 0, 0));
    }

    #[test]
    fn advance_across_year_end() {
        let mut t = dt(2023, 12, 31, 23, 59, 59);
        t.advance_one_second();
        assert_eq!(t, dt(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn year_increment_leaves_day_alone() {
        let mut t = dt(2023, 2, 28, 12, 0, 0);
        t.increment(Field::Year);
        assert_eq!(t, dt(2024, 2, 28, 12, 0, 0));
    }

    #[test]
    fn year_increment_off_leap_day_rolls_into_march() {
        // Feb 29 does not exist in 2025; the day overflow cascades.
        let mut t = dt(2024, 2, 29, 12, 0, 0);
        t.increment(Field::Year);
        assert_eq!(t, dt(2025, 3, 1, 12, 0, 0));
    }

    #[test]
    fn day_increments_walk_through_month() {
        for month in 1..=12u8 {
            let mut t = dt(2023, month as i8, 1, 0, 0, 0);
            let len = days_in_month(2023, month);
            for _ in 0..len {
                t.increment(Field::Day);
            }
            assert_eq!(t.day, 1, "month {month}");
            let expected_month = if month == 12 { 1 } else { month + 1 };
            assert_eq!(t.month, expected_month as i8, "month {month}");
        }
    }

    #[test]
    fn day_decrement_borrows_previous_month_length() {
        let mut t = dt(2024, 3, 1, 0, 0, 0);
        t.decrement(Field::Day);
        assert_eq!(t, dt(2024, 2, 29, 0, 0, 0));

        let mut t = dt(2024, 1, 1, 0, 0, 0);
        t.decrement(Field::Day);
        assert_eq!(t, dt(2023, 12, 31, 0, 0, 0));
    }

    #[test]
    fn month_increment_clamps_through_short_month() {
        // Jan 31 + one month lands past February's end and cascades to day 1.
        let mut t = dt(2024, 1, 31, 0, 0, 0);
        t.increment(Field::Month);
        assert_eq!(t, dt(2024, 3, 1, 0, 0, 0));
    }

    #[test]
    fn month_wraps_year() {
        let mut t = dt(2023, 12, 15, 0, 0, 0);
        t.increment(Field::Month);
        assert_eq!(t, dt(2024, 1, 15, 0, 0, 0));
        t.decrement(Field::Month);
        assert_eq!(t, dt(2023, 12, 15, 0, 0, 0));
    }

    #[test]
    fn decrement_second_at_midnight() {
        let mut t = dt(2024, 1, 1, 0, 0, 0);
        t.decrement(Field::Second);
        assert_eq!(t, dt(2023, 12, 31, 23, 59, 59));
    }

    /// Strategy producing normalized values.
    fn valid_datetime() -> impl Strategy<Value = DateTime> {
        (1i32..=9998, 1u8..=12, 0i8..24, 0i8..60, 0i8..60).prop_flat_map(
            |(year, month, hour, minute, second)| {
                (1..=days_in_month(year, month) as i8).prop_map(move |day| DateTime {
                    year,
                    month: month as i8,
                    day,
                    hour,
                    minute,
                    second,
                })
            },
        )
    }

    /// True when incrementing `field` would wrap or clamp, making the
    /// operation non-invertible by design.
    fn increment_wraps(t: &DateTime, field: Field) -> bool {
        match field {
            Field::Second => t.second == 59,
            Field::Minute => t.minute == 59,
            Field::Hour => t.hour == 23,
            Field::Day => t.day == days_in_month(t.year, t.month as u8) as i8,
            Field::Month => {
                t.month == 12
                    || t.day
                        > days_in_month(t.year, t.month as u8 + 1) as i8
            }
            Field::Year => t.month == 2 && t.day == 29,
        }
    }

    proptest! {
        #[test]
        fn normalize_is_identity_on_valid_values(t in valid_datetime()) {
            let mut n = t;
            n.normalize();
            prop_assert_eq!(n, t);
        }

        #[test]
        fn sixty_seconds_equal_one_minute(t in valid_datetime()) {
            let mut by_seconds = t;
            for _ in 0..60 {
                by_seconds.advance_one_second();
            }
            let mut by_minute = t;
            by_minute.increment(Field::Minute);
            prop_assert_eq!(by_seconds, by_minute);
        }

        #[test]
        fn increment_then_decrement_round_trips(
            t in valid_datetime(),
            field in prop_oneof![
                Just(Field::Month), Just(Field::Day), Just(Field::Year),
                Just(Field::Hour), Just(Field::Minute), Just(Field::Second),
            ],
        ) {
            prop_assume!(!increment_wraps(&t, field));
            let mut round = t;
            round.increment(field);
            round.decrement(field);
            prop_assert_eq!(round, t);
        }

        #[test]
        fn advance_keeps_fields_in_range(t in valid_datetime()) {
            let mut n = t;
            n.advance_one_second();
            prop_assert!((1..=12).contains(&n.month));
            prop_assert!((1..=days_in_month(n.year, n.month as u8) as i8).contains(&n.day));
            prop_assert!((0..24).contains(&n.hour));
            prop_assert!((0..60).contains(&n.minute));
            prop_assert!((0..60).contains(&n.second));
        }
    }
}
