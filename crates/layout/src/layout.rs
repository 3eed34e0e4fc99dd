//! Materialized month layout with date/cell mapping.

use monthgrid_calendar::{CalendarDate, Month, WeekStart};

use crate::grid::{CELL_COUNT, COLUMNS, Cells, GridCell, ROWS};
use crate::offset::month_offset;

/// Layout of one month under one week-start convention.
///
/// Holds only the offset and day count; cells are derived on demand, so the
/// mapping in both directions uses the same arithmetic as [`crate::layout_month`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthLayout {
    month: Month,
    week_start: WeekStart,
    offset: u8,
    days: u8,
}

impl MonthLayout {
    /// Computes the layout of `month` under `week_start`.
    pub fn new(month: Month, week_start: WeekStart) -> Self {
        Self {
            month,
            week_start,
            offset: month_offset(month, week_start),
            days: month.days(),
        }
    }

    /// Returns the displayed month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Returns the week-start convention.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns the number of leading empty cells.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Returns a fresh iterator over all 42 cells.
    pub fn cells(&self) -> Cells {
        Cells::new(self.offset, self.days)
    }

    /// Returns the cell at `index`, or `None` if `index` is outside 0..=41.
    pub fn cell(&self, index: usize) -> Option<GridCell> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(GridCell::new(index, self.day_at(index)))
    }

    /// Returns the date shown at `index`, or `None` for padding and
    /// out-of-range indices.
    pub fn date_at(&self, index: usize) -> Option<CalendarDate> {
        let day = self.day_at(index)?;
        self.month.day(day).ok()
    }

    /// Returns the cell index showing `date`, or `None` if `date` is not in
    /// the displayed month.
    pub fn index_of(&self, date: CalendarDate) -> Option<usize> {
        if !self.month.contains(date) {
            return None;
        }
        Some(usize::from(self.offset) + usize::from(date.day()) - 1)
    }

    /// Returns `true` if `date` occupies a cell of this layout.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.month.contains(date)
    }

    /// Returns `true` if the sixth row holds at least one day.
    pub fn trailing_row_visible(&self) -> bool {
        usize::from(self.offset) + usize::from(self.days) > (ROWS - 1) * COLUMNS
    }

    /// Returns the number of rows that hold at least one day (4..=6).
    pub fn used_rows(&self) -> usize {
        (usize::from(self.offset) + usize::from(self.days)).div_ceil(COLUMNS)
    }

    fn day_at(&self, index: usize) -> Option<u8> {
        let offset = usize::from(self.offset);
        if index < offset || index >= CELL_COUNT {
            return None;
        }
        let day = index - offset + 1;
        (day <= usize::from(self.days)).then_some(day as u8)
    }
}
