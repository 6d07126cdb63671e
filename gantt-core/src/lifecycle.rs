//! Chart lifecycle: release the old chart, fetch, build the new one.
//!
//! A rebuild is split in two halves around the (async) fetch:
//! [`ChartLifecycle::begin`] releases the live chart and hands out a
//! [`RebuildTicket`]; [`ChartLifecycle::finish`] takes the ticket back with
//! the fetch result. Each `begin` starts a new generation, so a ticket from
//! an older generation finishes as [`RebuildOutcome::Superseded`] and never
//! touches the chart.

use crate::chart_config::GanttChartConfig;
use crate::chart_row::ChartRow;
use crate::date_range::DateRangeFilter;
use crate::error::{ChartError, Result};

/// Chart engine seam. Implemented over the JS bridge in the browser and by
/// recording mocks in tests.
pub trait ChartRenderer {
    /// A live chart instance bound to the mount point.
    type Handle;

    /// Create a chart instance drawing `rows` with `config`.
    fn build(&mut self, config: &GanttChartConfig, rows: &[ChartRow]) -> Result<Self::Handle>;

    /// Dispose a chart instance and free everything bound to the mount point.
    fn release(&mut self, handle: Self::Handle);
}

/// What the chart area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChartPhase {
    /// Nothing built yet, or shut down.
    #[default]
    Empty,
    /// Fetch in flight; the chart area is blank.
    Loading,
    /// A chart for the latest filter is mounted.
    Rendered,
    /// The latest rebuild failed; the chart area is blank until the next
    /// filter change.
    Failed(ChartError),
}

/// Proof of a started rebuild, returned to [`ChartLifecycle::finish`].
#[derive(Debug, Clone, PartialEq)]
pub struct RebuildTicket {
    generation: u64,
    config: GanttChartConfig,
}

impl RebuildTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of [`ChartLifecycle::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildOutcome {
    Rendered,
    Failed(ChartError),
    /// A newer rebuild started (or the chart was shut down) while this one
    /// was fetching; its result was dropped.
    Superseded,
}

/// Owns the single live chart instance. At most one handle is live at any
/// time, and it is released before the next fetch starts, on failure, on
/// shutdown and on drop.
pub struct ChartLifecycle<R: ChartRenderer> {
    renderer: R,
    container_id: String,
    current: Option<R::Handle>,
    generation: u64,
    phase: ChartPhase,
}

impl<R: ChartRenderer> ChartLifecycle<R> {
    pub fn new(renderer: R, container_id: &str) -> Self {
        Self {
            renderer,
            container_id: container_id.to_string(),
            current: None,
            generation: 0,
            phase: ChartPhase::Empty,
        }
    }

    pub fn phase(&self) -> &ChartPhase {
        &self.phase
    }

    pub fn has_live_chart(&self) -> bool {
        self.current.is_some()
    }

    /// Start a rebuild for `filter`: release the live chart, enter
    /// [`ChartPhase::Loading`], and invalidate every earlier ticket.
    pub fn begin(&mut self, filter: &DateRangeFilter) -> RebuildTicket {
        self.release_current();
        self.generation += 1;
        self.phase = ChartPhase::Loading;
        log::debug!(
            "chart rebuild #{} for {:?} .. {:?}",
            self.generation,
            filter.start_date,
            filter.end_date
        );
        RebuildTicket {
            generation: self.generation,
            config: GanttChartConfig::for_filter(&self.container_id, filter),
        }
    }

    /// True if `ticket` belongs to the most recent `begin`.
    pub fn is_current(&self, ticket: &RebuildTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Complete a rebuild with its fetch result.
    pub fn finish(&mut self, ticket: RebuildTicket, fetched: Result<Vec<ChartRow>>) -> RebuildOutcome {
        if !self.is_current(&ticket) {
            log::debug!(
                "dropping result of chart rebuild #{} (current is #{})",
                ticket.generation,
                self.generation
            );
            return RebuildOutcome::Superseded;
        }

        self.release_current();
        let built = fetched.and_then(|rows| {
            log::info!("building chart with {} rows", rows.len());
            self.renderer.build(&ticket.config, &rows)
        });

        match built {
            Ok(handle) => {
                self.current = Some(handle);
                self.phase = ChartPhase::Rendered;
                RebuildOutcome::Rendered
            }
            Err(e) => {
                log::error!("chart rebuild #{} failed: {}", ticket.generation, e);
                self.phase = ChartPhase::Failed(e.clone());
                RebuildOutcome::Failed(e)
            }
        }
    }

    /// Release the live chart and invalidate any in-flight rebuild.
    pub fn shutdown(&mut self) {
        self.generation += 1;
        self.release_current();
        self.phase = ChartPhase::Empty;
    }

    fn release_current(&mut self) {
        if let Some(handle) = self.current.take() {
            self.renderer.release(handle);
        }
    }
}

impl<R: ChartRenderer> Drop for ChartLifecycle<R> {
    fn drop(&mut self) {
        self.release_current();
    }
}
