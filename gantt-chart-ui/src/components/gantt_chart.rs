//! The Gantt chart itself: owns the mount point and rebuilds the chart
//! whenever the committed date range changes.

use super::{ChartContainer, ErrorDisplay};
use crate::controller::ChartController;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use gantt_core::chart_config::CHART_ID;
use gantt_core::lifecycle::{ChartPhase, RebuildOutcome};
use gantt_core::source::ChartSource;

#[derive(Props, Clone, PartialEq)]
pub struct GanttChartProps {
    /// DOM id of the mount point
    #[props(default = CHART_ID.to_string())]
    pub id: String,
    /// Where the rows are fetched from
    #[props(default)]
    pub source: ChartSource,
    #[props(default = 450)]
    pub min_height: u32,
}

/// Fetches rows and renders them, once on mount and again after every
/// Apply/Clear. Results of superseded fetches are dropped.
#[component]
pub fn GanttChart(props: GanttChartProps) -> Element {
    let mut state = use_context::<AppState>();
    let container_id = props.id.clone();
    let controller = use_hook(move || ChartController::new(&container_id));
    use_hook(js_bridge::init_charts);

    // Rebuild on mount and whenever the committed range is replaced
    let effect_controller = controller.clone();
    let source = props.source.clone();
    use_effect(move || {
        let date_range = state.date_range.read();
        let filter = date_range.filter();
        log::info!("rebuilding chart for date range revision {}", date_range.revision());
        drop(date_range);

        let ticket = effect_controller.begin(&filter);
        state.phase.set(ChartPhase::Loading);

        let controller = effect_controller.clone();
        let source = source.clone();
        spawn(async move {
            match controller.complete(ticket, &source).await {
                RebuildOutcome::Superseded => {}
                RebuildOutcome::Rendered | RebuildOutcome::Failed(_) => {
                    state.phase.set(controller.phase());
                }
            }
        });
    });

    // Release the chart on unmount; late fetch results become no-ops
    let drop_controller = controller.clone();
    use_drop(move || drop_controller.shutdown());

    let phase = (state.phase)();

    rsx! {
        if let ChartPhase::Failed(err) = &phase {
            ErrorDisplay { error: err.clone() }
        }
        ChartContainer {
            id: props.id.clone(),
            phase: phase.clone(),
            min_height: props.min_height,
        }
    }
}
