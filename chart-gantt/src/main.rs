//! Timeline Chart with Date Range Filter
//!
//! Displays a Gantt-style timeline fetched from the remote chart endpoint:
//! one lane per category, one bar per row. Two month/year pickers below the
//! chart choose a From/To range; Apply pins the date axis to it, Clear lets
//! the axis auto-scale to the data again.
//!
//! Data flow:
//! 1. On mount, the chart fetches all rows and renders with an auto-scaled axis.
//! 2. Picker changes update the pending selection only.
//! 3. Apply/Clear replace the committed date range, which releases the
//!    current chart, re-fetches, and renders a new one.

use dioxus::prelude::*;
use gantt_chart_ui::components::{ChartHeader, FilterControls, GanttChart};
use gantt_chart_ui::state::AppState;
use gantt_core::chart_config::CHART_ID;
use gantt_core::source::ChartSource;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("launching timeline chart");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gantt-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Timeline".to_string(),
                source: ChartSource::default(),
            }

            GanttChart {
                id: CHART_ID.to_string(),
                source: ChartSource::default(),
            }

            FilterControls {}
        }
    }
}
