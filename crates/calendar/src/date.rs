//! Validated proleptic Gregorian dates.

use std::fmt;

use crate::error::CalendarError;
use crate::month::{Month, days_in_month};
use crate::weekday::Weekday;

/// A date in the proleptic Gregorian calendar.
///
/// Ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, 1-based month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
    /// [`CalendarError::InvalidDay`] if `day` does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                year,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Callers guarantee `month` in 1..=12 and `day` within the month.
    pub(crate) fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month this date belongs to.
    pub fn month(self) -> Month {
        Month::from_parts_unchecked(self.year, self.month - 1)
    }

    /// Returns the 1-based month number (1..=12).
    pub fn month_number(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(self) -> i64 {
        // Shift the year to start in March so the leap day is the last day.
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = y.div_euclid(400);
        let yoe = y.rem_euclid(400);
        let mp = (i64::from(self.month) + 9) % 12;
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday.
        let n = (self.days_since_epoch() + 4).rem_euclid(7);
        Weekday::from_days_from_sunday(n as u8)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = CalendarDate::new(2024, 2, 29).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month_number(), 2);
        assert_eq!(date.day(), 29);
        assert_eq!(date.month(), Month::new(2024, 1).unwrap());
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(2024, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_feb_29_common_year() {
        assert_eq!(
            CalendarDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                year: 2023,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn new_day_zero() {
        assert!(CalendarDate::new(2023, 1, 0).is_err());
    }

    #[test]
    fn epoch_days() {
        assert_eq!(CalendarDate::new(1970, 1, 1).unwrap().days_since_epoch(), 0);
        assert_eq!(CalendarDate::new(1970, 1, 2).unwrap().days_since_epoch(), 1);
        assert_eq!(
            CalendarDate::new(1969, 12, 31).unwrap().days_since_epoch(),
            -1
        );
        assert_eq!(
            CalendarDate::new(2000, 3, 1).unwrap().days_since_epoch(),
            11_017
        );
    }

    #[test]
    fn known_weekdays() {
        let cases: &[(i32, u8, u8, Weekday)] = &[
            (1970, 1, 1, Weekday::Thursday),
            (2000, 1, 1, Weekday::Saturday),
            (2015, 2, 1, Weekday::Sunday),
            (2023, 1, 1, Weekday::Sunday),
            (2024, 2, 1, Weekday::Thursday),
            (2024, 2, 29, Weekday::Thursday),
            (1900, 1, 1, Weekday::Monday),
            (1600, 3, 1, Weekday::Wednesday),
        ];
        for &(y, m, d, expected) in cases {
            let date = CalendarDate::new(y, m, d).unwrap();
            assert_eq!(date.weekday(), expected, "weekday of {date}");
        }
    }

    #[test]
    fn consecutive_days_advance_weekday() {
        let mut prev = CalendarDate::new(2023, 12, 1).unwrap().weekday();
        for day in 2..=31 {
            let wd = CalendarDate::new(2023, 12, day).unwrap().weekday();
            assert_eq!(wd, prev.add_days(1));
            prev = wd;
        }
    }

    #[test]
    fn ordering() {
        let a = CalendarDate::new(2023, 12, 31).unwrap();
        let b = CalendarDate::new(2024, 1, 1).unwrap();
        let c = CalendarDate::new(2024, 1, 2).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn display() {
        let date = CalendarDate::new(2024, 2, 5).unwrap();
        assert_eq!(date.to_string(), "2024-02-05");
    }

    #[test]
    fn hash_trait() {
        fn assert_hash<T: std::hash::Hash>() {}
        assert_hash::<CalendarDate>();
    }
}
