//! From/To month pickers with Apply and Clear buttons.

use super::MonthYearPicker;
use crate::state::AppState;
use dioxus::prelude::*;
use gantt_core::date_range::DateRangeFilter;
use gantt_core::month_year::MonthYear;
use gantt_utils::dates::format_date;

const SUBMIT_STYLE: &str = "padding: 6px 14px; border: 1px solid #216ba5; border-radius: 4px; background: #216ba5; color: #fff; cursor: pointer;";

/// Describe the committed range for the status text after the buttons.
fn describe_range(filter: &DateRangeFilter) -> String {
    match (filter.start_date, filter.end_date) {
        (None, None) => "Showing all dates".to_string(),
        (Some(start), Some(end)) => {
            format!("Showing {} to {}", format_date(&start), format_date(&end))
        }
        (Some(start), None) => format!("Showing from {}", format_date(&start)),
        (None, Some(end)) => format!("Showing until {}", format_date(&end)),
    }
}

/// Date range controls. Picker changes only touch the pending selection;
/// Apply commits it, Clear resets the committed range.
#[component]
pub fn FilterControls() -> Element {
    let mut state = use_context::<AppState>();
    let pending = (state.pending)();
    let years = state.years.read().clone();
    let current_year = (state.current_year)();
    let applied = describe_range(&state.date_range.read().filter());

    let on_start_change = move |month: MonthYear| {
        state.pending.write().start = month;
    };

    let on_end_change = move |month: MonthYear| {
        state.pending.write().end = month;
    };

    rsx! {
        div {
            class: "datepicker-box",
            style: "margin: 12px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            div { class: "datepicker-box__title", style: "font-weight: bold;", "From:" }
            MonthYearPicker {
                value: pending.start,
                range_start: pending.start,
                range_end: pending.end,
                years: years.clone(),
                current_year,
                on_change: on_start_change,
            }
            div { class: "datepicker-box__title", style: "font-weight: bold;", "To:" }
            MonthYearPicker {
                value: pending.end,
                range_start: pending.start,
                range_end: pending.end,
                years,
                current_year,
                on_change: on_end_change,
            }
            button {
                class: "custom-input custom-input--submit",
                style: SUBMIT_STYLE,
                onclick: move |_| state.apply(),
                "Apply"
            }
            button {
                class: "custom-input custom-input--submit",
                style: SUBMIT_STYLE,
                onclick: move |_| state.clear(),
                "Clear"
            }
            span { style: "font-size: 12px; color: #666;", "{applied}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_describe_range() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 6, 30).unwrap();
        assert_eq!(describe_range(&DateRangeFilter::default()), "Showing all dates");
        assert_eq!(
            describe_range(&DateRangeFilter::new(Some(start), Some(end))),
            "Showing 2021-03-01 to 2021-06-30"
        );
        assert_eq!(
            describe_range(&DateRangeFilter::new(None, Some(end))),
            "Showing until 2021-06-30"
        );
    }
}
