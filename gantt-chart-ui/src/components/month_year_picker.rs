//! Month/year picker: a button showing `MM/yyyy` that opens a calendar of
//! twelve months with a year header.

use dioxus::prelude::*;
use gantt_core::month_year::{MonthYear, YearNavigator, MONTH_LABELS};

const BUTTON_STYLE: &str = "padding: 6px 12px; border: 1px solid #ccc; border-radius: 4px; background: #fff; cursor: pointer; min-width: 90px;";
const CALENDAR_STYLE: &str = "position: absolute; z-index: 10; top: 110%; left: 0; width: 240px; background: #fff; border: 1px solid #ccc; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.15);";
const HEADER_STYLE: &str = "margin: 10px; display: flex; justify-content: space-between; padding-left: 18px; padding-right: 18px; background: #216ba5; border-radius: 4px;";
const NAV_BUTTON_STYLE: &str = "color: #fff; background: none; border: none; cursor: pointer;";
const MONTH_GRID_STYLE: &str = "display: grid; grid-template-columns: repeat(3, 1fr); gap: 4px; padding: 8px;";

#[derive(Props, Clone, PartialEq)]
pub struct MonthYearPickerProps {
    /// Currently selected month
    pub value: MonthYear,
    /// Months between these two are highlighted
    pub range_start: MonthYear,
    pub range_end: MonthYear,
    /// Options for the year dropdown
    pub years: Vec<i32>,
    /// Upper bound for year navigation
    pub current_year: i32,
    /// Called with the month the user clicked
    pub on_change: EventHandler<MonthYear>,
}

/// Month-granularity picker with decrement/dropdown/increment year header.
#[component]
pub fn MonthYearPicker(props: MonthYearPickerProps) -> Element {
    let mut open = use_signal(|| false);
    let mut navigator = use_signal(|| YearNavigator::new(props.value.year(), props.current_year));

    let value = props.value;
    let current_year = props.current_year;
    let on_change = props.on_change;
    let nav = navigator();
    let displayed_year = nav.displayed_year();
    let next_disabled = nav.next_year_disabled();

    let toggle = move |_: MouseEvent| {
        if !open() {
            navigator.set(YearNavigator::new(value.year(), current_year));
        }
        open.set(!open());
    };

    let months = MONTH_LABELS
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            MonthYear::new(displayed_year, index as u32 + 1).map(|month| (month, *label))
        })
        .map(|(month, label)| {
            let background = if month == value {
                "#216ba5"
            } else if month.is_between(props.range_start, props.range_end) {
                "#bad9f1"
            } else {
                "transparent"
            };
            let color = if month == value { "#fff" } else { "#000" };
            rsx! {
                button {
                    key: "{month}",
                    style: "padding: 6px 0; border: none; border-radius: 4px; cursor: pointer; background: {background}; color: {color};",
                    onclick: move |_| {
                        on_change.call(month);
                        open.set(false);
                    },
                    "{label}"
                }
            }
        });

    rsx! {
        div {
            style: "position: relative; display: inline-block;",
            button {
                class: "custom-input",
                style: BUTTON_STYLE,
                onclick: toggle,
                "{value}"
            }
            if open() {
                div {
                    class: "datepicker-box__calendar",
                    style: CALENDAR_STYLE,
                    div {
                        style: HEADER_STYLE,
                        button {
                            style: NAV_BUTTON_STYLE,
                            onclick: move |_| navigator.write().decrease_year(),
                            "<"
                        }
                        select {
                            style: "width: 60px; outline: none; cursor: pointer;",
                            value: "{displayed_year}",
                            onchange: move |evt: Event<FormData>| {
                                if let Ok(year) = evt.value().parse::<i32>() {
                                    navigator.write().change_year(year);
                                }
                            },
                            for year in props.years.iter().copied() {
                                option {
                                    key: "{year}",
                                    value: "{year}",
                                    selected: year == displayed_year,
                                    "{year}"
                                }
                            }
                        }
                        button {
                            style: NAV_BUTTON_STYLE,
                            disabled: next_disabled,
                            onclick: move |_| {
                                navigator.write().increase_year();
                            },
                            ">"
                        }
                    }
                    div {
                        style: MONTH_GRID_STYLE,
                        {months}
                    }
                }
            }
        }
    }
}
