//! Month offset, week index and header column order.
//!
//! All three are the same shift: the distance, in days, from the
//! convention's first weekday to the weekday in question.

use monthgrid_calendar::{Month, WeekStart, Weekday};

use crate::error::LayoutError;

/// Returns the zero-based grid column (0..=6) of `weekday` under `week_start`.
pub fn column_of(weekday: Weekday, week_start: WeekStart) -> u8 {
    let first = week_start.first_day().days_from_sunday();
    (weekday.days_from_sunday() + 7 - first) % 7
}

/// Returns the number of leading empty cells (0..=6) before day 1 of `month`.
///
/// Sunday-first yields `ordinal - 1`; Monday-first yields `6` when day 1 is a
/// Sunday and `ordinal - 2` otherwise.
pub fn month_offset(month: Month, week_start: WeekStart) -> u8 {
    column_of(month.first_day().weekday(), week_start)
}

/// Re-bases an absolute weekday ordinal (1 = Sunday .. 7 = Saturday) onto a
/// 1-based column position (1..=7).
///
/// Sunday-first is the identity; Monday-first maps 1 to 7 and every other
/// `n` to `n - 1`.
///
/// # Errors
///
/// Returns [`LayoutError::Calendar`] if `ordinal` is not in 1..=7.
pub fn week_index(ordinal: u8, week_start: WeekStart) -> Result<u8, LayoutError> {
    let weekday = Weekday::from_ordinal(ordinal)?;
    Ok(column_of(weekday, week_start) + 1)
}

/// Inverse of [`week_index`]: the weekday shown at 1-based column `index`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidWeekIndex`] if `index` is not in 1..=7.
pub fn weekday_for_index(index: u8, week_start: WeekStart) -> Result<Weekday, LayoutError> {
    if !(1..=7).contains(&index) {
        return Err(LayoutError::InvalidWeekIndex { index });
    }
    Ok(week_start.first_day().add_days(index - 1))
}

/// Weekdays in header order, column 0 first.
pub fn weekday_header(week_start: WeekStart) -> [Weekday; 7] {
    let first = week_start.first_day();
    std::array::from_fn(|col| first.add_days(col as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use monthgrid_calendar::CalendarError;

    /// The two-branch rule as the widget has always computed it.
    fn two_branch_offset(ordinal: u8, week_start: WeekStart) -> u8 {
        match week_start {
            WeekStart::Sunday => ordinal - 1,
            WeekStart::Monday if ordinal == 1 => 6,
            WeekStart::Monday => ordinal - 2,
            WeekStart::Saturday => unreachable!("no two-branch rule for Saturday-first"),
        }
    }

    fn two_branch_week_index(ordinal: u8, week_start: WeekStart) -> u8 {
        match week_start {
            WeekStart::Sunday => ordinal,
            WeekStart::Monday if ordinal == 1 => 7,
            WeekStart::Monday => ordinal - 1,
            WeekStart::Saturday => unreachable!("no two-branch rule for Saturday-first"),
        }
    }

    #[test]
    fn column_matches_two_branch_rule_for_all_14_pairs() {
        for week_start in [WeekStart::Sunday, WeekStart::Monday] {
            for ordinal in 1..=7u8 {
                let weekday = Weekday::from_ordinal(ordinal).unwrap();
                assert_eq!(
                    column_of(weekday, week_start),
                    two_branch_offset(ordinal, week_start),
                    "ordinal {ordinal}, {week_start:?}"
                );
            }
        }
    }

    #[test]
    fn week_index_matches_two_branch_rule_for_all_14_pairs() {
        for week_start in [WeekStart::Sunday, WeekStart::Monday] {
            for ordinal in 1..=7u8 {
                assert_eq!(
                    week_index(ordinal, week_start).unwrap(),
                    two_branch_week_index(ordinal, week_start),
                    "ordinal {ordinal}, {week_start:?}"
                );
            }
        }
    }

    #[test]
    fn week_index_rejects_bad_ordinal() {
        assert_eq!(
            week_index(0, WeekStart::Sunday).unwrap_err(),
            LayoutError::Calendar(CalendarError::InvalidWeekdayOrdinal { ordinal: 0 })
        );
        assert!(week_index(8, WeekStart::Monday).is_err());
    }

    #[test]
    fn week_index_roundtrips() {
        for week_start in [WeekStart::Sunday, WeekStart::Monday, WeekStart::Saturday] {
            let mut seen = [false; 7];
            for ordinal in 1..=7u8 {
                let index = week_index(ordinal, week_start).unwrap();
                assert!((1..=7).contains(&index));
                seen[(index - 1) as usize] = true;
                let back = weekday_for_index(index, week_start).unwrap();
                assert_eq!(back.ordinal(), ordinal, "{week_start:?}");
            }
            assert!(seen.iter().all(|&s| s), "not a bijection for {week_start:?}");
        }
    }

    #[test]
    fn weekday_for_index_rejects_out_of_range() {
        assert_eq!(
            weekday_for_index(0, WeekStart::Sunday).unwrap_err(),
            LayoutError::InvalidWeekIndex { index: 0 }
        );
    }

    #[test]
    fn saturday_first_columns() {
        assert_eq!(column_of(Weekday::Saturday, WeekStart::Saturday), 0);
        assert_eq!(column_of(Weekday::Sunday, WeekStart::Saturday), 1);
        assert_eq!(column_of(Weekday::Friday, WeekStart::Saturday), 6);
    }

    #[test]
    fn headers() {
        assert_eq!(weekday_header(WeekStart::Sunday)[0], Weekday::Sunday);
        let monday = weekday_header(WeekStart::Monday);
        assert_eq!(monday[0], Weekday::Monday);
        assert_eq!(monday[6], Weekday::Sunday);
        for week_start in [WeekStart::Sunday, WeekStart::Monday, WeekStart::Saturday] {
            for (col, day) in weekday_header(week_start).into_iter().enumerate() {
                assert_eq!(column_of(day, week_start) as usize, col);
            }
        }
    }

    #[test]
    fn month_offset_examples() {
        let feb_2024 = Month::new(2024, 1).unwrap();
        assert_eq!(month_offset(feb_2024, WeekStart::Sunday), 4);
        assert_eq!(month_offset(feb_2024, WeekStart::Monday), 3);
        let jan_2023 = Month::new(2023, 0).unwrap();
        assert_eq!(month_offset(jan_2023, WeekStart::Sunday), 0);
        assert_eq!(month_offset(jan_2023, WeekStart::Monday), 6);
        assert_eq!(month_offset(jan_2023, WeekStart::Saturday), 1);
    }
}
