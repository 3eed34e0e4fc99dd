//! Per-date decoration records.

use std::collections::BTreeSet;

use monthgrid_calendar::CalendarDate;

/// Caller-chosen identifier of a custom decoration (an underline colour, a
/// badge image, ...).
///
/// The tracker attaches no meaning to the value. Independent slots on the
/// same day are just distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StyleId(u32);

impl StyleId {
    /// Wraps a caller-defined style value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Decorations of a single date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    is_today: bool,
    is_selected: bool,
    custom_styles: BTreeSet<StyleId>,
}

impl Decoration {
    pub(crate) fn new(is_today: bool, is_selected: bool, custom_styles: BTreeSet<StyleId>) -> Self {
        Self {
            is_today,
            is_selected,
            custom_styles,
        }
    }

    /// Returns `true` if the date is today.
    pub fn is_today(&self) -> bool {
        self.is_today
    }

    /// Returns `true` if the date is the selected date.
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Returns the custom styles applied to the date.
    pub fn custom_styles(&self) -> &BTreeSet<StyleId> {
        &self.custom_styles
    }

    /// Returns `true` if `style` is applied to the date.
    pub fn has_style(&self, style: StyleId) -> bool {
        self.custom_styles.contains(&style)
    }

    /// Returns `true` if nothing decorates the date.
    pub fn is_plain(&self) -> bool {
        !self.is_today && !self.is_selected && self.custom_styles.is_empty()
    }
}

/// What a renderer needs to paint one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    index: usize,
    date: Option<CalendarDate>,
    decoration: Decoration,
}

impl CellView {
    pub(crate) fn new(index: usize, date: Option<CalendarDate>, decoration: Decoration) -> Self {
        Self {
            index,
            date,
            decoration,
        }
    }

    /// Returns the cell index (0..=41).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the date shown, or `None` for padding.
    pub fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    /// Returns the decorations to draw. Always plain for padding.
    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }
}
