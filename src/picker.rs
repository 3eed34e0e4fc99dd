//! Wiring between command-line input and the mark tracker.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use monthgrid_calendar::{CalendarDate, Month, WeekStart};
use monthgrid_marks::{FixedToday, MarkTracker, StyleId, TrackerConfig};
use tracing::{debug, info};

use crate::cli::MonthArgs;
use crate::config::MonthgridConfig;

/// Converts a chrono date into a [`CalendarDate`].
pub fn to_calendar_date(date: NaiveDate) -> Result<CalendarDate> {
    // chrono months and days are 1-based and always fit in a u8.
    CalendarDate::new(date.year(), date.month() as u8, date.day() as u8)
        .with_context(|| format!("date {date} is outside the supported calendar"))
}

/// Builds a tracker from config and flags and displays the requested month.
///
/// The wall clock is read once, so the default month and the today mark
/// always agree. Config marks are applied when their month is the one
/// displayed; others are skipped.
pub fn build_tracker(
    args: &MonthArgs,
    config: &MonthgridConfig,
) -> Result<MarkTracker<FixedToday>> {
    let today = to_calendar_date(args.today.unwrap_or_else(|| Local::now().date_naive()))?;

    let week_start: WeekStart = args.week_start.unwrap_or(config.week_start).into();
    let tracker_config = TrackerConfig::new()
        .with_week_start(week_start)
        .with_select_on_click(config.select_on_click);

    let month = match (args.year, args.month) {
        (None, None) => today.month(),
        (y, m) => Month::from_number(
            y.unwrap_or(today.year()),
            m.unwrap_or(today.month_number()),
        )?,
    };

    let mut tracker = MarkTracker::new(FixedToday::new(today), tracker_config);
    let layout = tracker.set_displayed_month(month);
    info!(%month, offset = layout.offset(), "month laid out");

    for mark in &config.marks {
        let date = NaiveDate::parse_from_str(&mark.date, "%Y-%m-%d")
            .with_context(|| format!("invalid mark date in config: '{}'", mark.date))?;
        let date = to_calendar_date(date)?;
        if !month.contains(date) {
            debug!(%date, "config mark outside displayed month, skipped");
            continue;
        }
        tracker.apply_custom_style(date, StyleId::new(mark.style))?;
    }

    Ok(tracker)
}
