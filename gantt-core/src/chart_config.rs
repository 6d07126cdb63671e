//! Configuration handed to the chart engine for one chart instance.
//!
//! The engine itself (axes, bars, tooltip, scrollbar) lives in JS; this module
//! only decides *what* it should draw. Field names serialize to camelCase for
//! the JS side.

use crate::date_range::DateRangeFilter;
use chrono::NaiveDate;
use serde::Serialize;

/// DOM id of the single chart mount point.
pub const CHART_ID: &str = "chart";

/// Date format for parsing row values and labelling the date axis.
pub const DATE_FORMAT: &str = "yyyy-MM-dd";

/// Row field used for the category lanes.
pub const CATEGORY_FIELD: &str = "category";

/// Right padding of the chart area, px.
pub const PADDING_RIGHT: u32 = 30;

/// Minimum distance between date axis grid lines, px.
pub const MIN_GRID_DISTANCE: u32 = 70;

/// Bar height as a percentage of its category band.
pub const COLUMN_HEIGHT_PERCENT: u32 = 70;

/// Saturation of the themed colour set used for bars without a colour.
pub const COLOR_SET_SATURATION: f64 = 0.4;

/// Days of padding the engine adds past the data on an auto-scaled end.
pub const AUTO_PADDING_DAYS: u32 = 1;

/// Tooltip text; `{field}` placeholders are filled from the hovered row.
pub const TOOLTIP_TEMPLATE: &str = "{category}: <b>{start}</b> - <b>{end}</b>";

/// One end of the date axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisBound {
    /// Clipped exactly to this date.
    Pinned(NaiveDate),
    /// Derived from the data's own range.
    Auto,
}

impl From<Option<NaiveDate>> for AxisBound {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(AxisBound::Auto, AxisBound::Pinned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseInterval {
    pub count: u32,
    pub time_unit: TimeUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAxisConfig {
    pub field: String,
    /// First category nearest the top.
    pub inversed: bool,
    pub grid_location: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateAxisConfig {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    /// No padding beyond pinned bounds.
    pub strict_min_max: bool,
    /// Padding past the data on each `Auto` end, strict or not.
    pub auto_padding_days: u32,
    pub base_interval: BaseInterval,
    pub min_grid_distance: u32,
    pub tooltip_location: f64,
}

impl DateAxisConfig {
    pub fn min_bound(&self) -> AxisBound {
        self.min.into()
    }

    pub fn max_bound(&self) -> AxisBound {
        self.max.into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesConfig {
    pub open_date_field: String,
    pub date_field: String,
    pub category_field: String,
    pub column_height_percent: u32,
    pub tooltip_template: String,
    pub fill_field: String,
    pub stroke_field: String,
    pub stroke_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSetConfig {
    pub saturation: f64,
}

/// Everything the chart engine needs besides the rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttChartConfig {
    pub container_id: String,
    pub padding_right: u32,
    /// Fade the chart in on first draw.
    pub fade_in: bool,
    pub date_format: String,
    pub input_date_format: String,
    pub color_set: ColorSetConfig,
    pub category_axis: CategoryAxisConfig,
    pub date_axis: DateAxisConfig,
    pub series: SeriesConfig,
    /// Horizontal scroll/zoom control over the date axis.
    pub scrollbar_x: bool,
}

impl GanttChartConfig {
    /// Chart configuration for `filter`, mounted at `container_id`.
    ///
    /// Present bounds are pinned exactly; absent bounds auto-scale. With
    /// both bounds absent the axis is fully non-strict.
    pub fn for_filter(container_id: &str, filter: &DateRangeFilter) -> Self {
        Self {
            container_id: container_id.to_string(),
            padding_right: PADDING_RIGHT,
            fade_in: true,
            date_format: DATE_FORMAT.to_string(),
            input_date_format: DATE_FORMAT.to_string(),
            color_set: ColorSetConfig {
                saturation: COLOR_SET_SATURATION,
            },
            category_axis: CategoryAxisConfig {
                field: CATEGORY_FIELD.to_string(),
                inversed: true,
                grid_location: 0.0,
            },
            date_axis: DateAxisConfig {
                min: filter.start_date,
                max: filter.end_date,
                strict_min_max: !filter.is_empty(),
                auto_padding_days: AUTO_PADDING_DAYS,
                base_interval: BaseInterval {
                    count: 1,
                    time_unit: TimeUnit::Day,
                },
                min_grid_distance: MIN_GRID_DISTANCE,
                tooltip_location: 0.0,
            },
            series: SeriesConfig {
                open_date_field: "start".to_string(),
                date_field: "end".to_string(),
                category_field: CATEGORY_FIELD.to_string(),
                column_height_percent: COLUMN_HEIGHT_PERCENT,
                tooltip_template: TOOLTIP_TEMPLATE.to_string(),
                fill_field: "color".to_string(),
                stroke_field: "color".to_string(),
                stroke_opacity: 1.0,
            },
            scrollbar_x: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_filter_auto_scales_both_ends() {
        let config = GanttChartConfig::for_filter(CHART_ID, &DateRangeFilter::default());
        assert_eq!(config.date_axis.min_bound(), AxisBound::Auto);
        assert_eq!(config.date_axis.max_bound(), AxisBound::Auto);
        assert!(!config.date_axis.strict_min_max);
    }

    #[test]
    fn test_full_filter_pins_both_ends() {
        let filter = DateRangeFilter::new(Some(ymd(2021, 3, 1)), Some(ymd(2021, 6, 30)));
        let config = GanttChartConfig::for_filter(CHART_ID, &filter);
        assert_eq!(config.date_axis.min_bound(), AxisBound::Pinned(ymd(2021, 3, 1)));
        assert_eq!(config.date_axis.max_bound(), AxisBound::Pinned(ymd(2021, 6, 30)));
        assert!(config.date_axis.strict_min_max);
    }

    #[test]
    fn test_half_open_filter() {
        let filter = DateRangeFilter::new(None, Some(ymd(2021, 6, 30)));
        let config = GanttChartConfig::for_filter(CHART_ID, &filter);
        assert_eq!(config.date_axis.min_bound(), AxisBound::Auto);
        assert_eq!(config.date_axis.max_bound(), AxisBound::Pinned(ymd(2021, 6, 30)));
    }

    #[test]
    fn test_half_open_filter_still_pads_auto_end() {
        let filter = DateRangeFilter::new(Some(ymd(2021, 3, 1)), None);
        let config = GanttChartConfig::for_filter(CHART_ID, &filter);
        assert!(config.date_axis.strict_min_max);
        assert_eq!(config.date_axis.max_bound(), AxisBound::Auto);
        assert_eq!(config.date_axis.auto_padding_days, 1);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["dateAxis"]["autoPaddingDays"], 1);
    }

    #[test]
    fn test_fixed_layout() {
        let config = GanttChartConfig::for_filter(CHART_ID, &DateRangeFilter::default());
        assert_eq!(config.container_id, "chart");
        assert!(config.category_axis.inversed);
        assert_eq!(config.category_axis.field, "category");
        assert_eq!(config.date_axis.base_interval.count, 1);
        assert_eq!(config.date_axis.base_interval.time_unit, TimeUnit::Day);
        assert_eq!(config.date_format, "yyyy-MM-dd");
        assert_eq!(config.input_date_format, "yyyy-MM-dd");
        assert!(config.scrollbar_x);
    }

    #[test]
    fn test_serializes_for_js() {
        let filter = DateRangeFilter::new(Some(ymd(2021, 3, 1)), None);
        let config = GanttChartConfig::for_filter(CHART_ID, &filter);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["containerId"], "chart");
        assert_eq!(value["dateAxis"]["min"], "2021-03-01");
        assert!(value["dateAxis"]["max"].is_null());
        assert_eq!(value["dateAxis"]["strictMinMax"], true);
        assert_eq!(value["dateAxis"]["baseInterval"]["timeUnit"], "day");
        assert_eq!(value["series"]["openDateField"], "start");
        assert_eq!(value["categoryAxis"]["inversed"], true);
    }
}
