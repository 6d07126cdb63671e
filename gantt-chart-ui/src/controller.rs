//! Shared handle to the chart lifecycle for Dioxus components.

use crate::data_source;
use crate::js_bridge::JsChartRenderer;
use gantt_core::chart_row::ChartRow;
use gantt_core::date_range::DateRangeFilter;
use gantt_core::error::Result;
use gantt_core::lifecycle::{ChartLifecycle, ChartPhase, RebuildOutcome, RebuildTicket};
use gantt_core::source::ChartSource;
use std::cell::RefCell;
use std::rc::Rc;

/// Owner of the single chart instance bound to one mount point.
///
/// Cheaply cloneable (via `Rc`) for use from effects and spawned tasks in
/// single-threaded WASM. Borrows are never held across an `.await`.
#[derive(Clone)]
pub struct ChartController {
    inner: Rc<RefCell<ChartLifecycle<JsChartRenderer>>>,
}

impl ChartController {
    pub fn new(container_id: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChartLifecycle::new(
                JsChartRenderer::new(),
                container_id,
            ))),
        }
    }

    pub fn phase(&self) -> ChartPhase {
        self.inner.borrow().phase().clone()
    }

    /// Release the current chart and start a rebuild for `filter`.
    pub fn begin(&self, filter: &DateRangeFilter) -> RebuildTicket {
        self.inner.borrow_mut().begin(filter)
    }

    pub fn finish(&self, ticket: RebuildTicket, fetched: Result<Vec<ChartRow>>) -> RebuildOutcome {
        self.inner.borrow_mut().finish(ticket, fetched)
    }

    /// Fetch rows for a started rebuild and finish it.
    pub async fn complete(&self, ticket: RebuildTicket, source: &ChartSource) -> RebuildOutcome {
        let fetched = data_source::fetch_rows(source).await;
        self.finish(ticket, fetched)
    }

    /// Release the chart and drop any in-flight rebuild.
    pub fn shutdown(&self) {
        self.inner.borrow_mut().shutdown();
    }
}
