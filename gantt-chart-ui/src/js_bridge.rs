//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js Gantt renderer lives in `assets/js/*.js` and is embedded at
//! compile time. The scripts are evaluated as globals (no ES modules) once D3
//! is available and exposed via `window.*`. This module serializes chart
//! configuration and rows and calls those globals.

use gantt_core::chart_config::GanttChartConfig;
use gantt_core::chart_row::{categories, ChartRow};
use gantt_core::error::{ChartError, Result};
use gantt_core::lifecycle::ChartRenderer;
use serde::Serialize;

// Embed all chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static GANTT_CHART_JS: &str = include_str!("../assets/js/gantt-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Gantt JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define `renderGanttChart(...)` and friends via
/// `function` declarations. They are evaluated at global scope with an
/// indirect `eval()` once D3 is ready and then promoted to `window.*`.
/// Safe to call more than once; only the first call installs the scripts.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, GANTT_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__ganttChartScripts && !window.__ganttChartsReady) {{ window.__ganttChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__ganttInitStarted) return;
            window.__ganttInitStarted = true;
            window.__ganttPending = window.__ganttPending || {};
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__ganttChartScripts);
                    delete window.__ganttChartScripts;
                    if (typeof renderGanttChart !== 'undefined') window.renderGanttChart = renderGanttChart;
                    if (typeof disposeGanttChart !== 'undefined') window.disposeGanttChart = disposeGanttChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__ganttChartsReady = true;
                    console.log('Gantt charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a Gantt chart under `handle_id`.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
/// The pending poll is registered under the handle so disposing the handle
/// before the render happens cancels it.
pub fn render_gantt_chart(handle_id: u32, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(handle_id, container_id, data_json, config_json));
}

fn render_script(handle_id: u32, container_id: &str, data_json: &str, config_json: &str) -> String {
    let container = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    format!(
        r#"
        (function() {{
            window.__ganttPending = window.__ganttPending || {{}};
            var poll = setInterval(function() {{
                if (window.__ganttChartsReady &&
                    typeof window.renderGanttChart !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    delete window.__ganttPending[{handle_id}];
                    try {{
                        window.renderGanttChart({handle_id}, {container}, {data}, {config});
                    }} catch(e) {{ console.error('[Gantt] renderGanttChart error:', e); }}
                }}
            }}, 100);
            window.__ganttPending[{handle_id}] = poll;
        }})();
        "#,
    )
}

/// Dispose the chart rendered (or about to be rendered) under `handle_id`.
pub fn dispose_gantt_chart(handle_id: u32, container_id: &str) {
    call_js(&dispose_script(handle_id, container_id));
}

/// Before the chart scripts are installed only the handle's own svg is
/// removed, never the rest of the container.
fn dispose_script(handle_id: u32, container_id: &str) -> String {
    let container = js_string(container_id);
    let selector = js_string(&format!("svg[data-gantt-handle=\"{handle_id}\"]"));
    format!(
        r#"
        var pending = window.__ganttPending && window.__ganttPending[{handle_id}];
        if (pending) {{ clearInterval(pending); delete window.__ganttPending[{handle_id}]; }}
        if (typeof window.disposeGanttChart !== 'undefined') {{
            window.disposeGanttChart({handle_id});
        }} else {{
            var el = document.getElementById({container});
            if (el) el.querySelectorAll({selector}).forEach(function(svg) {{ svg.remove(); }});
        }}
        "#,
    )
}

/// Data half of a render call; the config travels separately.
///
/// `tooltips[i]` is the ready-to-insert tooltip markup for `rows[i]`.
#[derive(Serialize)]
struct ChartPayload<'a> {
    rows: &'a [ChartRow],
    categories: Vec<String>,
    tooltips: Vec<String>,
}

impl<'a> ChartPayload<'a> {
    fn new(config: &GanttChartConfig, rows: &'a [ChartRow]) -> Self {
        let template = &config.series.tooltip_template;
        Self {
            rows,
            categories: categories(rows),
            tooltips: rows.iter().map(|row| row.tooltip_html(template)).collect(),
        }
    }
}

/// A chart instance living in the JS renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttChartHandle {
    pub id: u32,
    pub container_id: String,
}

/// [`ChartRenderer`] backed by the D3.js Gantt renderer.
#[derive(Debug, Default)]
pub struct JsChartRenderer {
    next_id: u32,
}

impl JsChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartRenderer for JsChartRenderer {
    type Handle = GanttChartHandle;

    fn build(&mut self, config: &GanttChartConfig, rows: &[ChartRow]) -> Result<GanttChartHandle> {
        if web_sys::window().is_none() {
            return Err(ChartError::Render("no browser window".to_string()));
        }
        let payload = ChartPayload::new(config, rows);
        let data_json =
            serde_json::to_string(&payload).map_err(|e| ChartError::Render(e.to_string()))?;
        let config_json =
            serde_json::to_string(config).map_err(|e| ChartError::Render(e.to_string()))?;

        self.next_id += 1;
        let handle = GanttChartHandle {
            id: self.next_id,
            container_id: config.container_id.clone(),
        };
        log::debug!("rendering gantt chart handle {}", handle.id);
        render_gantt_chart(handle.id, &handle.container_id, &data_json, &config_json);
        Ok(handle)
    }

    fn release(&mut self, handle: GanttChartHandle) {
        log::debug!("disposing gantt chart handle {}", handle.id);
        dispose_gantt_chart(handle.id, &handle.container_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantt_core::chart_config::CHART_ID;
    use gantt_core::chart_row::decode_rows;
    use gantt_core::date_range::DateRangeFilter;

    #[test]
    fn test_payload_tooltips_escape_row_markup() {
        let rows = decode_rows(
            r#"[
                {"category":"<script>alert(1)</script>","start":"2021-01-01","end":"2021-01-05"},
                {"category":"Ship","start":"2021-02-01","end":"2021-02-03"}
            ]"#,
        )
        .unwrap();
        let config = GanttChartConfig::for_filter(CHART_ID, &DateRangeFilter::default());
        let payload = ChartPayload::new(&config, &rows);
        assert_eq!(payload.tooltips.len(), rows.len());
        assert_eq!(
            payload.tooltips[0],
            "&lt;script&gt;alert(1)&lt;/script&gt;: <b>2021-01-01</b> - <b>2021-01-05</b>"
        );
        assert_eq!(payload.tooltips[1], "Ship: <b>2021-02-01</b> - <b>2021-02-03</b>");

        let json = serde_json::to_value(&payload).unwrap();
        assert!(!json["tooltips"][0].as_str().unwrap().contains("<script>"));
    }

    #[test]
    fn test_dispose_script_removes_orphan_svg_without_renderer() {
        let script = dispose_script(7, "chart");
        assert!(script.contains("window.disposeGanttChart(7)"));
        assert!(script.contains("window.__ganttPending[7]"));
        assert!(script.contains(r#"querySelectorAll("svg[data-gantt-handle=\"7\"]")"#));
        assert!(!script.contains("innerHTML"));
    }

    #[test]
    fn test_render_script_registers_pending_poll() {
        let script = render_script(3, "chart", "{}", "{}");
        assert!(script.contains("window.__ganttPending[3] = poll"));
        assert!(script.contains(r#"window.renderGanttChart(3, "chart", "{}", "{}")"#));
    }

    #[test]
    fn test_js_string_escapes_payload() {
        assert_eq!(js_string("chart"), "\"chart\"");
        assert_eq!(js_string("it's\n\"x\""), "\"it's\\n\\\"x\\\"\"");
    }
}
