//! Error types for the monthgrid-calendar crate.

/// Error type for all fallible operations in the monthgrid-calendar crate.
///
/// Covers validation failures for month numbers, zero-based month indices,
/// day-within-month values and weekday ordinals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a 1-based month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a zero-based month index is outside 0..=11.
    #[error("invalid month index: {index} (must be 0..=11)")]
    InvalidMonthIndex {
        /// The invalid month index that was provided.
        index: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The year of the month in question.
        year: i32,
        /// The 1-based month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a weekday ordinal is outside 1..=7.
    #[error("invalid weekday ordinal: {ordinal} (must be 1..=7)")]
    InvalidWeekdayOrdinal {
        /// The invalid ordinal that was provided.
        ordinal: u8,
    },

    /// Returned when month arithmetic leaves the representable year range.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The year the arithmetic would have produced.
        year: i64,
    },
}
