//! Notice shown above the chart when the last rebuild failed.

use dioxus::prelude::*;
use gantt_core::error::{ChartError, ErrorKind};

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub error: ChartError,
}

/// Heading for a failed rebuild, by error class.
pub fn error_heading(error: &ChartError) -> &'static str {
    match error.kind() {
        ErrorKind::Fetch => "Could not load chart data",
        ErrorKind::Decode => "Chart data is malformed",
        ErrorKind::Render => "Chart could not be drawn",
    }
}

/// The chart stays empty until the committed range changes again.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let heading = error_heading(&props.error);
    let detail = props.error.to_string();

    rsx! {
        div {
            role: "alert",
            class: "gantt-error",
            style: "padding: 10px 14px; margin: 0 0 8px 0; border-left: 4px solid #C62828; background: #FDECEA; color: #611A15; font-size: 13px;",
            div { style: "font-weight: 600;", "{heading}" }
            div { style: "margin-top: 2px;", "{detail}" }
            div {
                style: "margin-top: 4px; color: #8D6E63; font-size: 12px;",
                "Apply or Clear the date range to try again."
            }
        }
    }
}
