//! Timeline Chart Overview
//!
//! The same Gantt-style timeline as `chart-gantt`, without the date range
//! controls: the committed range stays empty, so the chart is built once on
//! mount with a date axis auto-scaled to the data.

use dioxus::prelude::*;
use gantt_chart_ui::components::{ChartHeader, GanttChart};
use gantt_chart_ui::state::AppState;
use gantt_core::chart_config::CHART_ID;
use gantt_core::source::ChartSource;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("launching timeline overview");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gantt-overview-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Timeline Overview".to_string(),
                source: ChartSource::default(),
            }

            GanttChart {
                id: CHART_ID.to_string(),
                source: ChartSource::default(),
            }
        }
    }
}
