//! Plain-text rendering of a tracker's current month.

use std::fmt::Write;

use anyhow::{Context, Result};
use monthgrid_calendar::{Month, Weekday};
use monthgrid_layout::{COLUMNS, ROWS, weekday_header};
use monthgrid_marks::{CellView, MarkTracker, TodayProvider};

const CELL_WIDTH: usize = 5;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn short_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sunday => "Su",
        Weekday::Monday => "Mo",
        Weekday::Tuesday => "Tu",
        Weekday::Wednesday => "We",
        Weekday::Thursday => "Th",
        Weekday::Friday => "Fr",
        Weekday::Saturday => "Sa",
    }
}

/// Month name, with the year only when it differs from today's.
pub fn title(month: Month, today_year: Option<i32>) -> String {
    let name = MONTH_NAMES[usize::from(month.index())];
    if today_year == Some(month.year()) {
        name.to_string()
    } else {
        format!("{name} {}", month.year())
    }
}

/// Formats one cell as five columns.
///
/// Today is bracketed `[..]` and the selection parenthesized `(..)`; the
/// selection wins when both apply. Any custom style adds a `*` in the fifth
/// column regardless of the brackets.
fn cell(view: &CellView) -> String {
    let Some(date) = view.date() else {
        return " ".repeat(CELL_WIDTH);
    };
    let decoration = view.decoration();
    let (open, close) = if decoration.is_selected() {
        ('(', ')')
    } else if decoration.is_today() {
        ('[', ']')
    } else {
        (' ', ' ')
    };
    let styled = if decoration.custom_styles().is_empty() {
        ' '
    } else {
        '*'
    };
    format!("{open}{:>2}{close}{styled}", date.day())
}

/// Renders title, weekday header and rows; the sixth row only when used.
pub fn render<T: TodayProvider>(tracker: &MarkTracker<T>) -> Result<String> {
    let layout = tracker
        .layout()
        .context("nothing to render: no month displayed")?;
    let views = tracker.cell_views()?;
    let mut out = String::new();

    writeln!(out, "{}", title(layout.month(), tracker.today().map(|d| d.year())))?;
    let header: Vec<String> = weekday_header(layout.week_start())
        .into_iter()
        .map(|day| format!(" {}  ", short_label(day)))
        .collect();
    writeln!(out, "{}", header.concat().trim_end())?;

    let rows = if layout.trailing_row_visible() {
        ROWS
    } else {
        ROWS - 1
    };
    for row in views.chunks(COLUMNS).take(rows) {
        let line: String = row.iter().map(cell).collect();
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use monthgrid_calendar::{CalendarDate, WeekStart};
    use monthgrid_marks::{FixedToday, StyleId, TrackerConfig};

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn title_omits_current_year() {
        let feb = Month::new(2024, 1).unwrap();
        assert_eq!(title(feb, Some(2024)), "February");
        assert_eq!(title(feb, Some(2025)), "February 2024");
        assert_eq!(title(feb, None), "February 2024");
    }

    #[test]
    fn february_2024_has_five_rows() {
        let mut tracker = MarkTracker::new(
            FixedToday::new(date(2024, 2, 20)),
            TrackerConfig::new(),
        );
        tracker.set_displayed_month(Month::new(2024, 1).unwrap());
        tracker.select(date(2024, 2, 15)).unwrap();
        tracker
            .apply_custom_style(date(2024, 2, 14), StyleId::new(1))
            .unwrap();

        let text = render(&tracker).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(lines[0], "February");
        assert_eq!(lines[1], " Su   Mo   Tu   We   Th   Fr   Sa");
        assert_eq!(lines[2], "                      1    2    3");
        assert!(lines[4].contains(" 14*(15) "));
        assert!(lines[5].contains("[20] "));
        assert_eq!(lines[6], " 25   26   27   28   29");
    }

    #[test]
    fn january_2023_monday_first_has_six_rows() {
        let mut tracker = MarkTracker::new(
            FixedToday::new(date(2024, 2, 20)),
            TrackerConfig::new().with_week_start(WeekStart::Monday),
        );
        tracker.set_displayed_month(Month::new(2023, 0).unwrap());
        let text = render(&tracker).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "January 2023");
        assert_eq!(lines[1], " Mo   Tu   We   Th   Fr   Sa   Su");
        assert_eq!(lines.len(), 2 + 6);
        assert_eq!(lines[7], " 30   31");
    }

    #[test]
    fn style_marker_survives_brackets() {
        let mut tracker = MarkTracker::new(
            FixedToday::new(date(2024, 2, 20)),
            TrackerConfig::new(),
        );
        tracker.set_displayed_month(Month::new(2024, 1).unwrap());
        tracker.select(date(2024, 2, 15)).unwrap();
        for day in [15, 20] {
            tracker
                .apply_custom_style(date(2024, 2, day), StyleId::new(2))
                .unwrap();
        }

        let text = render(&tracker).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[4].contains("(15)*"));
        assert!(lines[5].contains("[20]*"));
    }

    #[test]
    fn render_requires_month() {
        let tracker = MarkTracker::new(
            FixedToday::new(date(2024, 2, 20)),
            TrackerConfig::new(),
        );
        assert!(render(&tracker).is_err());
    }
}
