//! Selectable years for the month/year picker dropdown.

use chrono::{Datelike, NaiveDate};

/// Earliest year offered by the picker dropdown.
pub const YEAR_FLOOR: i32 = 1990;

/// Ascending years from `lower_bound` through the calendar year of
/// `reference`, inclusive on both ends. Empty if `reference` is earlier than
/// `lower_bound`.
pub fn years(lower_bound: i32, reference: NaiveDate) -> Vec<i32> {
    (lower_bound..=reference.year()).collect()
}

/// Picker dropdown years as of today's local date.
pub fn selectable_years() -> Vec<i32> {
    years(YEAR_FLOOR, gantt_utils::dates::today())
}
