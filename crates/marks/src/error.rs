//! Error types for the monthgrid-marks crate.

use monthgrid_calendar::{CalendarDate, CalendarError, Month};

/// Error type for fallible tracker operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkError {
    /// A marking or click operation ran before any month was displayed.
    #[error("no month is displayed: call set_displayed_month first")]
    NotDisplaying,

    /// The date has no cell in the displayed month's layout.
    #[error("date {date} is not visible while {month} is displayed")]
    DateNotVisible {
        /// The date that was passed in.
        date: CalendarDate,
        /// The month currently displayed.
        month: Month,
    },

    /// Month navigation left the representable range.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
