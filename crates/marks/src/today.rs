//! Source of the current date.

use monthgrid_calendar::CalendarDate;

/// Supplies "today" to a [`MarkTracker`](crate::MarkTracker).
///
/// The tracker asks on every month change and never caches the answer
/// across calls.
pub trait TodayProvider {
    /// Returns the current date.
    fn today(&self) -> CalendarDate;
}

impl<F> TodayProvider for F
where
    F: Fn() -> CalendarDate,
{
    fn today(&self) -> CalendarDate {
        self()
    }
}

/// A provider that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedToday(CalendarDate);

impl FixedToday {
    /// Creates a provider pinned to `date`.
    pub fn new(date: CalendarDate) -> Self {
        Self(date)
    }
}

impl TodayProvider for FixedToday {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
