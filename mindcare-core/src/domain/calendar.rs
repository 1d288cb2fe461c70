//! Calendar month grid generation.
//!
//! Builds the cells of a single month laid out in a fixed 7-column,
//! Sunday-first grid, plus the month arithmetic and display helpers the
//! student and doctor calendar screens share.

use chrono::{Datelike, NaiveDate};
use shared::CalendarCell;

/// Column headers of the grid, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Build the cells of the month containing `reference`.
///
/// Only the year and month of `reference` are read. The result starts with
/// one blank cell per weekday before the 1st, followed by every day of the
/// month in order. The tail is never padded, so the last row may be short.
pub fn build_month_grid(reference: NaiveDate) -> Vec<CalendarCell> {
    let year = reference.year();
    let month = reference.month();
    let first_day = first_weekday(year, month);
    let days_in_month = days_in_month(year, month);

    log::debug!(
        "🗓️ Building grid for {}/{}: {} padding cells, {} days",
        month,
        year,
        first_day,
        days_in_month
    );

    let mut cells = Vec::with_capacity((first_day + days_in_month) as usize);
    cells.extend((0..first_day).map(|_| CalendarCell::blank()));
    cells.extend(
        (1..=days_in_month)
            .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
            .map(CalendarCell::day),
    );
    cells
}

/// Split grid cells into rows of seven
pub fn weeks<T>(cells: &[T]) -> Vec<&[T]> {
    cells.chunks(7).collect()
}

/// Get the number of days in a given month and year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Weekday of the 1st of the month (0 = Sunday, 1 = Monday, etc.)
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// The (year, month) before the given one
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The (year, month) after the given one
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Grid title, e.g. "October 2024"
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{} {}", month_name(date.month()), date.year())
}

/// Heading above the selected day's appointments, e.g. "Thursday, October 17"
pub fn format_selected_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_october_2024_grid() {
        let grid = build_month_grid(ymd(2024, 10, 17));

        assert_eq!(grid.len(), 33);
        assert!(grid[0].is_blank());
        assert!(grid[1].is_blank());
        assert_eq!(grid[2].date, Some(ymd(2024, 10, 1)));
        assert_eq!(grid[32].date, Some(ymd(2024, 10, 31)));

        let rows = weeks(&grid);
        assert_eq!(rows.len(), 5);
        assert!(rows[..4].iter().all(|row| row.len() == 7));
        assert_eq!(rows[4].len(), 5);
    }

    #[test]
    fn test_grid_only_reads_year_and_month() {
        assert_eq!(build_month_grid(ymd(2024, 10, 1)), build_month_grid(ymd(2024, 10, 31)));
    }

    #[test]
    fn test_grid_properties_for_every_month() {
        for year in [1900, 2000, 2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let grid = build_month_grid(ymd(year, month, 1));
                let padding = grid.iter().take_while(|cell| cell.is_blank()).count();

                assert_eq!(padding as u32, first_weekday(year, month));
                assert_eq!(grid.len() as u32, padding as u32 + days_in_month(year, month));
                assert!((28..=37).contains(&grid.len()));

                let days: Vec<NaiveDate> = grid[padding..].iter().map(|cell| cell.date.unwrap()).collect();
                assert_eq!(days[0], ymd(year, month, 1));
                assert_eq!(days[0].weekday().num_days_from_sunday() as usize, padding);
                for pair in days.windows(2) {
                    assert_eq!(pair[0].succ_opt(), Some(pair[1]));
                }
                assert_eq!(days.last().unwrap().succ_opt().unwrap().day(), 1);
            }
        }
    }

    #[test]
    fn test_february_that_fits_four_rows() {
        // February 2015 starts on a Sunday and has 28 days
        let grid = build_month_grid(ymd(2015, 2, 10));
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|cell| !cell.is_blank()));
        assert_eq!(weeks(&grid).len(), 4);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31); // January
        assert_eq!(days_in_month(2025, 4), 30); // April
        assert_eq!(days_in_month(2025, 2), 28); // February (non-leap)
        assert_eq!(days_in_month(2024, 2), 29); // February (leap year)
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_first_weekday() {
        assert_eq!(first_weekday(2024, 10), 2); // Tuesday
        assert_eq!(first_weekday(2024, 9), 0); // Sunday
        assert_eq!(first_weekday(2024, 11), 5); // Friday
        assert_eq!(first_weekday(2024, 13), 0);
    }

    #[test]
    fn test_month_navigation_helpers() {
        assert_eq!(previous_month(2025, 6), (2025, 5));
        assert_eq!(previous_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 6), (2025, 7));
        assert_eq!(next_month(2025, 12), (2026, 1));
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Invalid Month");
        assert_eq!(format_month_year(ymd(2024, 10, 17)), "October 2024");
        assert_eq!(format_selected_heading(ymd(2024, 10, 17)), "Thursday, October 17");
        assert_eq!(format_selected_heading(ymd(2024, 11, 5)), "Tuesday, November 5");
        assert_eq!(WEEKDAY_LABELS[0], "Sun");
        assert_eq!(WEEKDAY_LABELS[6], "Sat");
    }
}
