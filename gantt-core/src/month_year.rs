//! Month-granularity values edited by the From/To pickers.

use chrono::{Datelike, NaiveDate};
use gantt_utils::dates;
use std::fmt;

/// Short month names shown in the picker grid, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month. Stored as the first day of that month so every value
/// is a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthYear(NaiveDate);

impl MonthYear {
    /// Returns `None` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        dates::first_day_of_month(year, month).map(MonthYear)
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        MonthYear(date - chrono::Days::new(u64::from(date.day0())))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        dates::last_day_of_month(self.year(), self.month()).unwrap_or(self.0)
    }

    /// True if this month lies within `[start, end]`. An inverted range
    /// contains nothing.
    pub fn is_between(&self, start: MonthYear, end: MonthYear) -> bool {
        start <= *self && *self <= end
    }
}

/// Rendered as `MM/yyyy`, the label shown on the picker buttons.
impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month(), self.year())
    }
}

/// Year navigation in a picker's header: decrement, dropdown, increment.
///
/// The increment control is disabled once the displayed year reaches the
/// current calendar year. Decrement has no lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearNavigator {
    displayed_year: i32,
    current_year: i32,
}

impl YearNavigator {
    pub fn new(displayed_year: i32, current_year: i32) -> Self {
        Self {
            displayed_year,
            current_year,
        }
    }

    pub fn displayed_year(&self) -> i32 {
        self.displayed_year
    }

    pub fn next_year_disabled(&self) -> bool {
        self.displayed_year >= self.current_year
    }

    /// Advance one year unless already at the current year. Returns whether
    /// the displayed year changed.
    pub fn increase_year(&mut self) -> bool {
        if self.next_year_disabled() {
            return false;
        }
        self.displayed_year += 1;
        true
    }

    pub fn decrease_year(&mut self) {
        self.displayed_year -= 1;
    }

    /// Jump straight to a year picked from the dropdown.
    pub fn change_year(&mut self, year: i32) {
        self.displayed_year = year;
    }
}

/// The two picker values the user is still editing. Never read by the
/// chart; copied into the committed filter on Apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    pub start: MonthYear,
    pub end: MonthYear,
}

impl PendingSelection {
    /// Both pickers default to the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        let month = MonthYear::from_date(today);
        Self {
            start: month,
            end: month,
        }
    }

    /// Axis bounds for this selection: first day of the From month through
    /// the last day of the To month. Ordering is not checked.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.start.first_day(), self.end.last_day())
    }
}
