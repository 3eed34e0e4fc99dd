//! Weekdays and the week-start convention.

use std::fmt;

use crate::error::CalendarError;

/// Day of the week with a fixed absolute ordinal (1 = Sunday .. 7 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays in ordinal order, Sunday first.
const ALL: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Returns the weekday for an absolute ordinal (1 = Sunday .. 7 = Saturday).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekdayOrdinal`] if `ordinal` is not in 1..=7.
    pub fn from_ordinal(ordinal: u8) -> Result<Self, CalendarError> {
        if !(1..=7).contains(&ordinal) {
            return Err(CalendarError::InvalidWeekdayOrdinal { ordinal });
        }
        Ok(ALL[(ordinal - 1) as usize])
    }

    /// Returns the absolute ordinal (1 = Sunday .. 7 = Saturday).
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the number of days since the preceding Sunday (0..=6).
    pub fn days_from_sunday(self) -> u8 {
        self as u8
    }

    /// Returns the weekday `n` days after this one.
    pub fn add_days(self, n: u8) -> Self {
        ALL[((self as u8 + n % 7) % 7) as usize]
    }

    pub(crate) fn from_days_from_sunday(n: u8) -> Self {
        ALL[(n % 7) as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        };
        f.write_str(name)
    }
}

/// Which weekday occupies the first column of the month grid.
///
/// Supplied by the host (usually derived from the user's locale); nothing in
/// this workspace reads locale settings itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WeekStart {
    /// Sunday-first, as in the US and Japan.
    #[default]
    Sunday,
    /// Monday-first, ISO 8601 and most of Europe.
    Monday,
    /// Saturday-first, common across the Middle East.
    Saturday,
}

impl WeekStart {
    /// Returns the weekday shown in column 0.
    pub fn first_day(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
            WeekStart::Saturday => Weekday::Saturday,
        }
    }
}
