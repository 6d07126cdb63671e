pub mod chart_config;
pub mod chart_row;
pub mod date_range;
pub mod error;
pub mod lifecycle;
pub mod month_year;
pub mod source;
pub mod years;
