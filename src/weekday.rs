//! Czech weekday names and day-section selection for weekly menus.
//!
//! Many restaurants publish the whole week on one page, with a weekday
//! header ("Pondělí", "Úterý", ...) in front of each day's dishes. The helpers
//! here find those headers and cut out the rows belonging to one day.
//!
//! The reference day is always passed in as an index into [`DAYS_OF_WEEK`];
//! only the binary entry point asks the clock for it.

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Czech weekday names, Monday first, lowercase.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "pondělí", "úterý", "středa", "čtvrtek", "pátek", "sobota", "neděle",
];

/// Index of `day` into [`DAYS_OF_WEEK`].
pub fn weekday_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

/// Index of the weekday of `date` into [`DAYS_OF_WEEK`].
pub fn date_weekday_index(date: NaiveDate) -> usize {
    weekday_index(date.weekday())
}

/// Reference date and its weekday index: `date` when given, otherwise the
/// local date. The clock is read at most once, so both always agree.
pub fn reference_day(date: Option<NaiveDate>) -> (NaiveDate, usize) {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    (date, date_weekday_index(date))
}

/// Today's weekday index from the local clock.
#[allow(dead_code)]
pub fn current_weekday_index() -> usize {
    reference_day(None).1
}

/// Recognize a weekday header.
///
/// The whole text, trimmed and lowercased, must be a weekday name.
pub fn day_from_header(text: &str) -> Option<usize> {
    let text = text.trim().to_lowercase();
    DAYS_OF_WEEK.iter().position(|day| *day == text)
}

/// Keep only the rows that belong to the day `today`.
///
/// Rows are scanned in order. Capturing starts after the header for `today`
/// and ends at the next weekday header. Headers themselves are never
/// returned. If no header matches `today`, the result is empty.
pub fn select_day_section<T, F>(rows: impl IntoIterator<Item = T>, header_of: F, today: usize) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut section = Vec::new();
    let mut inside_wanted_day = false;

    for row in rows {
        match day_from_header(&header_of(&row)) {
            Some(day) if day == today => {
                inside_wanted_day = true;
            }
            Some(_) if inside_wanted_day => break,
            Some(_) => {}
            None if inside_wanted_day => section.push(row),
            None => {}
        }
    }

    section
}
