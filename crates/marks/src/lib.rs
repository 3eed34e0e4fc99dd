//! # monthgrid-marks
//!
//! Decoration state (today, selection, custom styles) for a month grid that
//! survives month navigation, plus resolution of cell clicks back to dates.
//!
//! Decorations are keyed by [`CalendarDate`](monthgrid_calendar::CalendarDate),
//! never by cell index; cell indices are re-derived from the current
//! [`MonthLayout`](monthgrid_layout::MonthLayout) whenever they are needed.
//!
//! ## Quick Start
//!
//! ```
//! use monthgrid_calendar::{CalendarDate, Month};
//! use monthgrid_marks::{FixedToday, MarkTracker, StyleId, TrackerConfig};
//!
//! let today = CalendarDate::new(2024, 2, 20).unwrap();
//! let mut tracker = MarkTracker::new(FixedToday::new(today), TrackerConfig::new());
//! tracker.set_displayed_month(Month::new(2024, 1).unwrap());
//!
//! let repaint = tracker.select(CalendarDate::new(2024, 2, 15).unwrap()).unwrap();
//! assert_eq!(repaint.current(), 18);
//! tracker.apply_custom_style(today, StyleId::new(1)).unwrap();
//!
//! assert!(tracker.decoration(today).is_today());
//! assert_eq!(tracker.resolve_cell_click(18).unwrap(), CalendarDate::new(2024, 2, 15).ok());
//! ```

mod config;
mod decoration;
mod error;
mod today;
mod tracker;

pub use config::TrackerConfig;
pub use decoration::{CellView, Decoration, StyleId};
pub use error::MarkError;
pub use today::{FixedToday, TodayProvider};
pub use tracker::{ClickKind, ClickOutcome, MarkTracker, Repaint};
