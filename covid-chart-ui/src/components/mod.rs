//! Reusable Dioxus RSX components for the tracker screen.

mod chart_header;
mod error_display;
mod loading_spinner;
mod metric_selector;
mod readout_panel;
mod region_selector;
mod spark_chart;
mod time_scale_selector;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use readout_panel::ReadoutPanel;
pub use region_selector::RegionSelector;
pub use spark_chart::SparkChart;
pub use time_scale_selector::TimeScaleSelector;
