//! Reusable Dioxus RSX components for the Gantt chart apps.

mod chart_container;
mod chart_header;
mod error_display;
mod filter_controls;
mod gantt_chart;
mod month_year_picker;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use filter_controls::FilterControls;
pub use gantt_chart::GanttChart;
pub use month_year_picker::MonthYearPicker;
