//! # monthgrid-layout
//!
//! Deterministic placement of a month's days into a fixed 6×7 grid.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Month + WeekStart"] -->|"month_offset()"| B["leading empty cells (0..=6)"]
//!     A -->|"layout_month()"| C["42 GridCells"]
//!     C -->|"is_trailing_row_visible()"| D["bool"]
//!     A -->|"MonthLayout::new()"| E["MonthLayout"]
//!     E -->|".index_of(date)"| F["cell index"]
//!     F -->|".date_at(index)"| G["CalendarDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use monthgrid_calendar::{Month, WeekStart};
//! use monthgrid_layout::{is_trailing_row_visible, layout_month, month_offset};
//!
//! let feb = Month::new(2024, 1).unwrap();
//! assert_eq!(month_offset(feb, WeekStart::Sunday), 4);
//!
//! let cells: Vec<_> = layout_month(feb, WeekStart::Sunday).collect();
//! assert_eq!(cells.len(), 42);
//! assert_eq!(cells[4].day(), Some(1));
//! assert!(!is_trailing_row_visible(&cells));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `offset` | Leading offset, week index and header column order |
//! | `grid` | Lazy 42-cell layout and trailing-row visibility |
//! | `layout` | Materialized month layout with date/cell mapping |
//! | `error` | Error types |

mod error;
mod grid;
mod layout;
mod offset;

pub use error::LayoutError;
pub use grid::{CELL_COUNT, COLUMNS, Cells, GridCell, ROWS, is_trailing_row_visible, layout_month};
pub use layout::MonthLayout;
pub use offset::{column_of, month_offset, week_index, weekday_for_index, weekday_header};
