//! Day count conventions.
//!
//! Maps a pair of calendar dates and a convention tag to a year fraction.
//! Used by instrument-level callers to turn schedules expressed in dates
//! into the year fractions the numerical core works in.
//!
//! The ACT/365F day arithmetic here is deliberately calendar-library-free:
//! it counts days with explicit Gregorian leap-year handling. The results
//! match exact calendars for the date ranges bonds live in, but callers
//! needing full calendar semantics (business-day rolls, holiday adjustment)
//! should layer them on top.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Day count convention tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCount {
    /// Actual/365 Fixed.
    #[default]
    Act365F,
    /// 30/360 US (NASD).
    Thirty360,
}

/// A calendar date with no timezone or calendar-system baggage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date {
    /// Year.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
}

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl Date {
    /// Creates a date, validating month and day ranges.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CoreError::InvalidDate { year, month, day });
        }
        let mut max_day = DAYS_IN_MONTH[(month - 1) as usize];
        if month == 2 && is_leap_year(year) {
            max_day += 1;
        }
        if day == 0 || day > max_day {
            return Err(CoreError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Day-of-year offset of this date within its own year (Jan 1 = 0).
    fn day_of_year(&self) -> i64 {
        let mut days = 0i64;
        for m in 1..self.month {
            days += i64::from(DAYS_IN_MONTH[(m - 1) as usize]);
            if m == 2 && is_leap_year(self.year) {
                days += 1;
            }
        }
        days + i64::from(self.day) - 1
    }
}

/// Year fraction between two dates under the given convention.
///
/// Dates given out of order are swapped, so the result is always >= 0.
///
/// # Example
///
/// ```rust
/// use tenor_core::daycounts::{year_fraction, Date, DayCount};
///
/// let d0 = Date::from_ymd(2024, 1, 15).unwrap();
/// let d1 = Date::from_ymd(2025, 1, 15).unwrap();
///
/// // 2024 is a leap year: 366 actual days
/// let yf = year_fraction(d0, d1, DayCount::Act365F);
/// assert!((yf - 366.0 / 365.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn year_fraction(d0: Date, d1: Date, dc: DayCount) -> f64 {
    let (d0, d1) = if d0 > d1 { (d1, d0) } else { (d0, d1) };

    match dc {
        DayCount::Act365F => {
            let mut days = i64::from(d1.year - d0.year) * 365;
            for year in d0.year..d1.year {
                if is_leap_year(year) {
                    days += 1;
                }
            }
            days += d1.day_of_year() - d0.day_of_year();
            days as f64 / 365.0
        }
        DayCount::Thirty360 => {
            // 30/360 US (NASD): clamp the 31st to the 30th, and the end
            // 31st only when the start is already on the 30th.
            let mut start_day = d0.day as i64;
            let mut end_day = d1.day as i64;
            if start_day == 31 {
                start_day = 30;
            }
            if end_day == 31 && start_day == 30 {
                end_day = 30;
            }
            let days = 360 * i64::from(d1.year - d0.year)
                + 30 * (i64::from(d1.month) - i64::from(d0.month))
                + (end_day - start_day);
            days as f64 / 360.0
        }
    }
}
