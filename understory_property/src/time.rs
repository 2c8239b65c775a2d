// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene time.
//!
//! [`JulianDate`] is the time argument every property node is queried with.
//! It is split into a whole day number and the seconds elapsed within that day
//! so that sub-second precision survives at astronomical day counts.

/// Seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A point in time as a Julian day number plus seconds into that day.
///
/// Values are always normalized so that `0 <= seconds_of_day < 86400`.
///
/// # Example
///
/// ```rust
/// use understory_property::JulianDate;
///
/// let noon = JulianDate::new(2_451_545, 43_200.0);
/// let later = noon.add_seconds(50_000.0);
///
/// assert_eq!(later.day_number(), 2_451_546);
/// assert_eq!(later.seconds_of_day(), 6_800.0);
/// assert_eq!(later.seconds_difference(noon), 50_000.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct JulianDate {
    day_number: i32,
    seconds_of_day: f64,
}

impl JulianDate {
    /// The J2000 epoch, 2000-01-01 12:00:00 TT.
    pub const J2000: Self = Self {
        day_number: 2_451_545,
        seconds_of_day: 43_200.0,
    };

    /// Creates a date, carrying whole days out of `seconds_of_day` in either
    /// direction.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "day carry is bounded by the i32 day range; the cast saturates"
    )]
    pub fn new(day_number: i32, seconds_of_day: f64) -> Self {
        let whole_days = (seconds_of_day / SECONDS_PER_DAY) as i32;
        let mut days = day_number.saturating_add(whole_days);
        let mut seconds = seconds_of_day - f64::from(whole_days) * SECONDS_PER_DAY;
        if seconds < 0.0 {
            seconds += SECONDS_PER_DAY;
            days = days.saturating_sub(1);
        }
        // Rounding on the line above can land exactly on the next day.
        if seconds >= SECONDS_PER_DAY {
            seconds -= SECONDS_PER_DAY;
            days = days.saturating_add(1);
        }
        Self {
            day_number: days,
            seconds_of_day: seconds,
        }
    }

    /// Creates a date from a fractional Julian day count.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is corrected by `new`"
    )]
    pub fn from_total_days(total_days: f64) -> Self {
        let whole = total_days as i32;
        Self::new(whole, (total_days - f64::from(whole)) * SECONDS_PER_DAY)
    }

    /// Returns the whole Julian day number.
    #[must_use]
    #[inline]
    pub const fn day_number(self) -> i32 {
        self.day_number
    }

    /// Returns the seconds elapsed since the start of the day.
    #[must_use]
    #[inline]
    pub const fn seconds_of_day(self) -> f64 {
        self.seconds_of_day
    }

    /// Returns this date as a fractional Julian day count.
    ///
    /// Loses sub-millisecond precision at present-day day numbers.
    #[must_use]
    pub fn total_days(self) -> f64 {
        f64::from(self.day_number) + self.seconds_of_day / SECONDS_PER_DAY
    }

    /// Returns a date `seconds` later (or earlier, if negative).
    #[must_use]
    pub fn add_seconds(self, seconds: f64) -> Self {
        Self::new(self.day_number, self.seconds_of_day + seconds)
    }

    /// Returns `self - earlier` in seconds.
    #[must_use]
    pub fn seconds_difference(self, earlier: Self) -> f64 {
        let days = f64::from(self.day_number) - f64::from(earlier.day_number);
        days * SECONDS_PER_DAY + (self.seconds_of_day - earlier.seconds_of_day)
    }
}
