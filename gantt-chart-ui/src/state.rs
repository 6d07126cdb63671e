//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gantt_core::date_range::DateRangeState;
use gantt_core::lifecycle::ChartPhase;
use gantt_core::month_year::PendingSelection;
use gantt_core::years::selectable_years;
use gantt_utils::dates;

/// Shared application state for the Gantt chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Committed date range applied to the chart axis
    pub date_range: Signal<DateRangeState>,
    /// From/To picker values not yet applied
    pub pending: Signal<PendingSelection>,
    /// What the chart area currently shows
    pub phase: Signal<ChartPhase>,
    /// Years offered by the picker dropdowns, computed once at mount
    pub years: Signal<Vec<i32>>,
    /// Calendar year at mount; upper bound for the pickers
    pub current_year: Signal<i32>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let today = dates::today();
        Self {
            date_range: Signal::new(DateRangeState::new()),
            pending: Signal::new(PendingSelection::new(today)),
            phase: Signal::new(ChartPhase::Empty),
            years: Signal::new(selectable_years()),
            current_year: Signal::new(dates::current_year()),
        }
    }

    /// Commit the pending picker values as the chart's date range.
    pub fn apply(&mut self) {
        let (start, end) = self.pending.peek().bounds();
        self.date_range.write().commit(Some(start), Some(end));
    }

    /// Drop the date range; the axis auto-scales again.
    pub fn clear(&mut self) {
        self.date_range.write().clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
