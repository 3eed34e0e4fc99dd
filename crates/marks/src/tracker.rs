//! The mark tracker: decoration state across month navigation.

use std::collections::{BTreeMap, BTreeSet};

use monthgrid_calendar::{CalendarDate, Month, WeekStart};
use monthgrid_layout::{CELL_COUNT, MonthLayout};
use tracing::debug;

use crate::config::TrackerConfig;
use crate::decoration::{CellView, Decoration, StyleId};
use crate::error::MarkError;
use crate::today::TodayProvider;

/// Cells a renderer must redraw after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repaint {
    previous: Option<usize>,
    current: usize,
}

impl Repaint {
    /// Returns the cell of the previously selected date, if it is on screen
    /// and differs from the new one.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// Returns the cell of the newly selected date.
    pub fn current(&self) -> usize {
        self.current
    }
}

/// Kind of pointer interaction on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// A short tap. Selects the day when `select_on_click` is enabled.
    Tap,
    /// A long press. Only reported, never selects.
    LongPress,
}

/// Result of a click on a populated cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    date: CalendarDate,
    kind: ClickKind,
    repaint: Option<Repaint>,
}

impl ClickOutcome {
    /// Returns the clicked date, to be reported to the host.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the kind of click.
    pub fn kind(&self) -> ClickKind {
        self.kind
    }

    /// Returns the cells to redraw if the click changed the selection.
    pub fn repaint(&self) -> Option<Repaint> {
        self.repaint
    }
}

/// Tracks today, the selected date and custom styles for one picker.
///
/// Lifecycle: a new tracker displays nothing; every marking and click
/// operation fails with [`MarkError::NotDisplaying`] until
/// [`set_displayed_month`](Self::set_displayed_month) has been called once.
///
/// Marks are stored by date, so they persist while other months are shown
/// and reappear when their month is displayed again. Marking a date outside
/// the displayed month is rejected with [`MarkError::DateNotVisible`].
///
/// The tracker is not synchronized; hosts that share it across threads must
/// wrap it in a lock.
#[derive(Debug)]
pub struct MarkTracker<T> {
    today_source: T,
    config: TrackerConfig,
    layout: Option<MonthLayout>,
    today: Option<CalendarDate>,
    selected: Option<CalendarDate>,
    styles: BTreeMap<CalendarDate, BTreeSet<StyleId>>,
}

impl<T: TodayProvider> MarkTracker<T> {
    /// Creates a tracker that displays nothing yet.
    pub fn new(today_source: T, config: TrackerConfig) -> Self {
        Self {
            today_source,
            config,
            layout: None,
            today: None,
            selected: None,
            styles: BTreeMap::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the current layout, or `None` before the first month is shown.
    pub fn layout(&self) -> Option<&MonthLayout> {
        self.layout.as_ref()
    }

    /// Returns the displayed month.
    pub fn displayed_month(&self) -> Option<Month> {
        self.layout.map(|layout| layout.month())
    }

    /// Returns today as captured by the last layout or refresh.
    pub fn today(&self) -> Option<CalendarDate> {
        self.today
    }

    /// Returns the selected date, whether or not it is on screen.
    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Displays `month` using the configured week start.
    pub fn set_displayed_month(&mut self, month: Month) -> &MonthLayout {
        self.set_displayed_month_with(month, self.config.week_start())
    }

    /// Displays `month` using an explicit week start.
    ///
    /// Recomputes the layout and captures today afresh. Stored marks are
    /// kept, including those outside `month`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_displayed_month_with(&mut self, month: Month, week_start: WeekStart) -> &MonthLayout {
        let layout = MonthLayout::new(month, week_start);
        let today = self.today_source.today();
        self.today = Some(today);
        debug!(offset = layout.offset(), %today, "month displayed");
        self.layout.insert(layout)
    }

    /// Displays the month after the current one.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::NotDisplaying`] before the first month is shown,
    /// or [`MarkError::Calendar`] if the year overflows.
    pub fn next_month(&mut self) -> Result<&MonthLayout, MarkError> {
        self.navigate(1)
    }

    /// Displays the month before the current one.
    ///
    /// # Errors
    ///
    /// Same as [`next_month`](Self::next_month).
    pub fn previous_month(&mut self) -> Result<&MonthLayout, MarkError> {
        self.navigate(-1)
    }

    fn navigate(&mut self, delta: i32) -> Result<&MonthLayout, MarkError> {
        let layout = self.require_layout()?;
        let month = layout.month().add_months(delta)?;
        Ok(self.set_displayed_month_with(month, layout.week_start()))
    }

    /// Re-reads today without changing the displayed month.
    ///
    /// Returns the cells whose today decoration changed (old today first).
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::NotDisplaying`] before the first month is shown.
    pub fn refresh_today(&mut self) -> Result<Vec<usize>, MarkError> {
        let layout = self.require_layout()?;
        let today = self.today_source.today();
        let previous = self.today.replace(today);
        if previous == Some(today) {
            return Ok(Vec::new());
        }
        Ok(previous
            .into_iter()
            .chain(std::iter::once(today))
            .filter_map(|date| layout.index_of(date))
            .collect())
    }

    /// Selects `date`, clearing the previous selection.
    ///
    /// A previously selected date that is also today keeps its today
    /// decoration; only the selection moves.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::NotDisplaying`] before the first month is shown,
    /// or [`MarkError::DateNotVisible`] if `date` is not in the displayed month.
    pub fn select(&mut self, date: CalendarDate) -> Result<Repaint, MarkError> {
        let layout = self.require_layout()?;
        let current = visible_index(&layout, date)?;
        let previous = self
            .selected
            .replace(date)
            .and_then(|old| layout.index_of(old))
            .filter(|&index| index != current);
        debug!(%date, current, ?previous, "date selected");
        Ok(Repaint { previous, current })
    }

    /// Clears the selection, wherever it is.
    ///
    /// Returns the cell to redraw if the cleared date is on screen.
    pub fn clear_selection(&mut self) -> Option<usize> {
        let old = self.selected.take()?;
        debug!(date = %old, "selection cleared");
        self.layout.and_then(|layout| layout.index_of(old))
    }

    /// Adds `style` to `date`. Applying a style twice has no further effect.
    ///
    /// Returns the cell to redraw.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::NotDisplaying`] before the first month is shown,
    /// or [`MarkError::DateNotVisible`] if `date` is not in the displayed month.
    pub fn apply_custom_style(&mut self, date: CalendarDate, style: StyleId) -> Result<usize, MarkError> {
        let layout = self.require_layout()?;
        let index = visible_index(&layout, date)?;
        self.styles.entry(date).or_default().insert(style);
        debug!(%date, style = style.get(), index, "custom style applied");
        Ok(index)
    }

    /// Removes `style` from `date`, wherever it is.
    ///
    /// Returns the cell to redraw if a style was removed and `date` is on
    /// screen.
    pub fn clear_custom_style(&mut self, date: CalendarDate, style: StyleId) -> Option<usize> {
        let styles = self.styles.get_mut(&date)?;
        if !styles.remove(&style) {
            return None;
        }
        if styles.is_empty() {
            self.styles.remove(&date);
        }
        debug!(%date, style = style.get(), "custom style cleared");
        self.layout.and_then(|layout| layout.index_of(date))
    }

    /// Maps a clicked cell back to its date.
    ///
    /// Returns `Ok(None)` for padding cells and for indices outside 0..=41.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::NotDisplaying`] before the first month is shown.
    pub fn resolve_cell_click(&self, index: usize) -> Result<Option<CalendarDate>, MarkError> {
        Ok(self.require_layout()?.date_at(index))
    }

    /// Handles a click on cell `index`.
    ///
    /// Returns `Ok(None)` when the cell holds no date. A tap also selects the
    /// date when the configuration asks for it.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::NotDisplaying`] before the first month is shown.
    pub fn click(&mut self, index: usize, kind: ClickKind) -> Result<Option<ClickOutcome>, MarkError> {
        let Some(date) = self.resolve_cell_click(index)? else {
            return Ok(None);
        };
        let repaint = match kind {
            ClickKind::Tap if self.config.select_on_click() => Some(self.select(date)?),
            _ => None,
        };
        Ok(Some(ClickOutcome {
            date,
            kind,
            repaint,
        }))
    }

    /// Returns the decorations of `date`, on screen or not.
    pub fn decoration(&self, date: CalendarDate) -> Decoration {
        Decoration::new(
            self.today == Some(date),
            self.selected == Some(date),
            self.styles.get(&date).cloned().unwrap_or_default(),
        )
    }

    /// Returns a snapshot of all 42 cells for the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::NotDisplaying`] before the first month is shown.
    pub fn cell_views(&self) -> Result<Vec<CellView>, MarkError> {
        let layout = self.require_layout()?;
        Ok((0..CELL_COUNT)
            .map(|index| {
                let date = layout.date_at(index);
                let decoration = date.map(|d| self.decoration(d)).unwrap_or_default();
                CellView::new(index, date, decoration)
            })
            .collect())
    }

    fn require_layout(&self) -> Result<MonthLayout, MarkError> {
        self.layout.ok_or(MarkError::NotDisplaying)
    }
}

fn visible_index(layout: &MonthLayout, date: CalendarDate) -> Result<usize, MarkError> {
    layout.index_of(date).ok_or(MarkError::DateNotVisible {
        date,
        month: layout.month(),
    })
}
