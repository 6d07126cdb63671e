//! Mount point the D3 renderer draws into, with a status overlay.

use dioxus::prelude::*;
use gantt_core::lifecycle::ChartPhase;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the renderer looks up
    pub id: String,
    pub phase: ChartPhase,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Overlay text for `phase`; `None` leaves the plot area unobstructed.
pub fn overlay_text(phase: &ChartPhase) -> Option<&'static str> {
    match phase {
        ChartPhase::Loading => Some("Loading chart data..."),
        ChartPhase::Failed(_) => Some("No chart to show"),
        ChartPhase::Empty | ChartPhase::Rendered => None,
    }
}

/// The inner `div` is owned by the renderer; Dioxus never writes children
/// into it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let busy = props.phase == ChartPhase::Loading;
    let overlay = overlay_text(&props.phase);
    let frame = format!(
        "position: relative; width: 100%; min-height: {}px; border: 1px solid #eee; border-radius: 4px;",
        props.min_height
    );

    rsx! {
        div {
            class: "gantt-frame",
            style: "{frame}",
            "aria-busy": "{busy}",
            if let Some(text) = overlay {
                div {
                    class: "gantt-overlay",
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: #888; font-size: 13px; pointer-events: none;",
                    "{text}"
                }
            }
            div {
                id: "{props.id}",
                class: "gantt-mount",
                style: "width: 100%;",
            }
        }
    }
}
