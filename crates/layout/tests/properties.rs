use monthgrid_calendar::{Month, WeekStart};
use monthgrid_layout::{
    CELL_COUNT, MonthLayout, is_trailing_row_visible, layout_month, month_offset, week_index,
};

const CONVENTIONS: [WeekStart; 3] = [WeekStart::Sunday, WeekStart::Monday, WeekStart::Saturday];

fn months() -> impl Iterator<Item = Month> {
    let start = Month::new(1900, 0).unwrap();
    (0..(250 * 12)).map(move |step| start.add_months(step).unwrap())
}

#[test]
fn every_layout_has_42_cells_and_contiguous_days() {
    for month in months() {
        for week_start in CONVENTIONS {
            let cells: Vec<_> = layout_month(month, week_start).collect();
            assert_eq!(cells.len(), CELL_COUNT, "{month} {week_start:?}");

            let populated: Vec<_> = cells.iter().filter(|c| !c.is_empty()).collect();
            assert_eq!(
                populated.len(),
                usize::from(month.days()),
                "populated count for {month} {week_start:?}"
            );

            let first = populated[0].index();
            for (i, cell) in populated.iter().enumerate() {
                assert_eq!(cell.index(), first + i, "gap in {month} {week_start:?}");
                assert_eq!(cell.day(), Some(i as u8 + 1));
            }
        }
    }
}

#[test]
fn day_one_lands_in_its_weekday_column() {
    for month in months() {
        for week_start in CONVENTIONS {
            let offset = month_offset(month, week_start);
            let cells: Vec<_> = layout_month(month, week_start).collect();
            assert_eq!(cells[usize::from(offset)].day(), Some(1));

            let ordinal = month.first_day().weekday().ordinal();
            assert_eq!(
                week_index(ordinal, week_start).unwrap(),
                offset + 1,
                "{month} {week_start:?}"
            );
        }
    }
}

#[test]
fn date_cell_mapping_roundtrips() {
    for month in months() {
        for week_start in CONVENTIONS {
            let layout = MonthLayout::new(month, week_start);
            for cell in layout.cells() {
                match cell.day() {
                    Some(day) => {
                        let date = layout.date_at(cell.index()).unwrap();
                        assert_eq!(date, month.day(day).unwrap());
                        assert_eq!(layout.index_of(date), Some(cell.index()));
                    }
                    None => assert_eq!(layout.date_at(cell.index()), None),
                }
            }
        }
    }
}

#[test]
fn trailing_row_hidden_iff_last_seven_cells_empty() {
    for month in months() {
        for week_start in CONVENTIONS {
            let cells: Vec<_> = layout_month(month, week_start).collect();
            let all_empty = cells[35..].iter().all(|c| c.is_empty());
            assert_eq!(is_trailing_row_visible(&cells), !all_empty);
            assert_eq!(
                MonthLayout::new(month, week_start).trailing_row_visible(),
                !all_empty
            );
        }
    }
}

#[test]
fn sunday_and_monday_offsets_differ_by_one_column() {
    for month in months() {
        let sunday = month_offset(month, WeekStart::Sunday);
        let monday = month_offset(month, WeekStart::Monday);
        assert_eq!((sunday + 6) % 7, monday, "{month}");
    }
}
