//! Shared utility functions for the Gantt chart crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Local, NaiveDate};

    /// Format used by the chart data source and the chart's date axis.
    pub const CHART_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(CHART_DATE_FORMAT).to_string()
    }

    /// Today's date on the local clock.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Calendar year of today's date on the local clock.
    pub fn current_year() -> i32 {
        today().year()
    }

    /// First day of the given month, or `None` for an invalid month.
    pub fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, 1)
    }

    /// Last day of the given month, or `None` for an invalid month.
    /// Handles leap years (Feb 29) and December rollover.
    pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        if !(1..=12).contains(&month) {
            return None;
        }
        first_day_of_month(next_year, next_month)?.pred_opt()
    }

}
