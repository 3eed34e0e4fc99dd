//! The 42-cell month grid.

use std::iter::FusedIterator;

use monthgrid_calendar::{Month, WeekStart};

use crate::offset::month_offset;

/// Number of cells in every month grid.
pub const CELL_COUNT: usize = 42;

/// Number of columns (days per week).
pub const COLUMNS: usize = 7;

/// Number of week rows, including the collapsible sixth row.
pub const ROWS: usize = 6;

/// Index of the first cell in the sixth row.
const TRAILING_ROW_START: usize = CELL_COUNT - COLUMNS;

/// One position in the grid, either holding a day of the displayed month or
/// padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    index: usize,
    day: Option<u8>,
}

impl GridCell {
    pub(crate) fn new(index: usize, day: Option<u8>) -> Self {
        Self { index, day }
    }

    /// Returns the cell index (0..=41).
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the day of month, or `None` for padding.
    pub fn day(self) -> Option<u8> {
        self.day
    }

    /// Returns `true` if this cell is padding.
    pub fn is_empty(self) -> bool {
        self.day.is_none()
    }

    /// Returns the zero-based row (0..=5).
    pub fn row(self) -> usize {
        self.index / COLUMNS
    }

    /// Returns the zero-based column (0..=6).
    pub fn column(self) -> usize {
        self.index % COLUMNS
    }
}

/// Lazy iterator over the 42 cells of a month layout.
///
/// Clone it before consuming, or call [`layout_month`] again, to iterate a
/// second time.
#[derive(Debug, Clone)]
pub struct Cells {
    offset: usize,
    days: usize,
    next: usize,
}

impl Cells {
    pub(crate) fn new(offset: u8, days: u8) -> Self {
        Self {
            offset: usize::from(offset),
            days: usize::from(days),
            next: 0,
        }
    }
}

impl Iterator for Cells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.next >= CELL_COUNT {
            return None;
        }
        let index = self.next;
        self.next += 1;
        let day = (index >= self.offset && index - self.offset < self.days)
            .then(|| (index - self.offset + 1) as u8);
        Some(GridCell::new(index, day))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CELL_COUNT - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}

/// Lays out `month` into 42 cells.
///
/// Cell `i` is empty while `i < offset`, then holds day `i - offset + 1`
/// through the last day of the month, then is empty again.
pub fn layout_month(month: Month, week_start: WeekStart) -> Cells {
    Cells::new(month_offset(month, week_start), month.days())
}

/// Returns `false` iff every cell of the sixth row (indices 35..=41) is empty.
///
/// Missing trailing cells in a short slice count as empty.
pub fn is_trailing_row_visible(cells: &[GridCell]) -> bool {
    cells
        .iter()
        .skip(TRAILING_ROW_START)
        .take(COLUMNS)
        .any(|cell| !cell.is_empty())
}
