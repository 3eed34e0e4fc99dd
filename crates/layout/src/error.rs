//! Error types for the monthgrid-layout crate.

use monthgrid_calendar::CalendarError;

/// Error type for fallible operations in the monthgrid-layout crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Returned when a header column index is outside 1..=7.
    #[error("invalid week index: {index} (must be 1..=7)")]
    InvalidWeekIndex {
        /// The invalid week index that was provided.
        index: u8,
    },

    /// A calendar value (such as a weekday ordinal) failed validation.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
