//! Core types for national and per-state COVID-19 daily statistics.
//!
//! - `daily_record`: the `DailyRecord` wire type and its decoding rules
//! - `region`: `Region`, grouping by region and selector entries
//! - `metric` / `time_scale`: what the chart projects and how far back it reaches
//! - `source`: the `DataSource` abstraction over the two endpoints
//! - `api` (feature `api`): reqwest client for the COVID Tracking API

#[cfg(feature = "api")]
pub mod api;
pub mod daily_record;
pub mod metric;
pub mod region;
pub mod source;
pub mod time_scale;

pub use daily_record::{into_ascending, DailyRecord, RecordError};
pub use metric::Metric;
pub use region::{group_by_region, region_choices, Region, RegionMap, NATIONWIDE_LABEL};
pub use source::{DataSource, FetchError, StaticSource};
pub use time_scale::TimeScale;
