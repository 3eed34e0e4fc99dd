//! Tracker configuration.

use monthgrid_calendar::WeekStart;

/// Configuration for a [`MarkTracker`](crate::MarkTracker).
///
/// # Example
///
/// ```
/// use monthgrid_calendar::WeekStart;
/// use monthgrid_marks::TrackerConfig;
///
/// let config = TrackerConfig::new()
///     .with_week_start(WeekStart::Monday)
///     .with_select_on_click(false);
/// assert_eq!(config.week_start(), WeekStart::Monday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    week_start: WeekStart,
    select_on_click: bool,
}

impl TrackerConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: Sunday-first, taps select the clicked day.
    pub fn new() -> Self {
        Self {
            week_start: WeekStart::Sunday,
            select_on_click: true,
        }
    }

    /// Sets the week-start convention used by `set_displayed_month`.
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Sets whether a tap on a day also selects it.
    pub fn with_select_on_click(mut self, select_on_click: bool) -> Self {
        self.select_on_click = select_on_click;
        self
    }

    /// Returns the week-start convention.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns whether a tap selects the clicked day.
    pub fn select_on_click(&self) -> bool {
        self.select_on_click
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}
