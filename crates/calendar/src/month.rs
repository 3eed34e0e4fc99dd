//! Year/month values, month lengths and month navigation.

use std::fmt;

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 = January).
const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_length(year, month - 1))
}

fn month_length(year: i32, index: u8) -> u8 {
    if index == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[index as usize]
    }
}

/// A calendar month: a year and a zero-based month index (0 = January .. 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    index: u8,
}

impl Month {
    /// Creates a month from a year and a zero-based month index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthIndex`] if `index` is not in 0..=11.
    pub fn new(year: i32, index: u8) -> Result<Self, CalendarError> {
        if index > 11 {
            return Err(CalendarError::InvalidMonthIndex { index });
        }
        Ok(Self { year, index })
    }

    /// Creates a month from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn from_number(year: i32, month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self {
            year,
            index: month - 1,
        })
    }

    /// Callers guarantee `index` in 0..=11.
    pub(crate) fn from_parts_unchecked(year: i32, index: u8) -> Self {
        Self { year, index }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the zero-based month index (0..=11).
    pub fn index(self) -> u8 {
        self.index
    }

    /// Returns the 1-based month number (1..=12).
    pub fn number(self) -> u8 {
        self.index + 1
    }

    /// Returns the number of days in this month (28..=31).
    pub fn days(self) -> u8 {
        month_length(self.year, self.index)
    }

    /// Returns the first day of this month.
    pub fn first_day(self) -> CalendarDate {
        CalendarDate::from_parts_unchecked(self.year, self.number(), 1)
    }

    /// Returns the last day of this month.
    pub fn last_day(self) -> CalendarDate {
        CalendarDate::from_parts_unchecked(self.year, self.number(), self.days())
    }

    /// Returns the given day of this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is not in `1..=self.days()`.
    pub fn day(self, day: u8) -> Result<CalendarDate, CalendarError> {
        CalendarDate::new(self.year, self.number(), day)
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month_number() == self.number()
    }

    /// Returns the month `delta` months away, or `None` if the year overflows.
    pub fn checked_add_months(self, delta: i32) -> Option<Self> {
        let total = i64::from(self.year) * 12 + i64::from(self.index) + i64::from(delta);
        let year = i32::try_from(total.div_euclid(12)).ok()?;
        let index = total.rem_euclid(12) as u8;
        Some(Self { year, index })
    }

    /// Returns the month `delta` months away.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the resulting year does
    /// not fit in an `i32`.
    pub fn add_months(self, delta: i32) -> Result<Self, CalendarError> {
        self.checked_add_months(delta)
            .ok_or(CalendarError::YearOutOfRange {
                year: (i64::from(self.year) * 12 + i64::from(self.index) + i64::from(delta))
                    .div_euclid(12),
            })
    }

    /// Returns the following month.
    pub fn succ(self) -> Result<Self, CalendarError> {
        self.add_months(1)
    }

    /// Returns the preceding month.
    pub fn pred(self) -> Result<Self, CalendarError> {
        self.add_months(-1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.number())
    }
}
