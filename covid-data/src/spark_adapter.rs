//! Binds a windowed, projected series to a spark-line surface.

use covid_core::{DailyRecord, Metric, TimeScale};
use covid_utils::dates::format_display_date;
use std::sync::Arc;

/// Chart adapter for one region's series.
///
/// Holds the full ascending series plus the active metric and time scale.
/// The window offset and projected values are cached and recomputed whenever
/// either selection changes.
#[derive(Debug, Clone)]
pub struct SparkAdapter {
    series: Arc<[DailyRecord]>,
    metric: Metric,
    time_scale: TimeScale,
    window_start: usize,
    values: Vec<i64>,
}

impl SparkAdapter {
    /// Adapter showing `series` with the default selection (positive, max).
    pub fn new(series: Arc<[DailyRecord]>) -> Self {
        Self::with_selection(series, Metric::default(), TimeScale::default())
    }

    pub fn with_selection(series: Arc<[DailyRecord]>, metric: Metric, time_scale: TimeScale) -> Self {
        let mut adapter = Self {
            series,
            metric,
            time_scale,
            window_start: 0,
            values: Vec::new(),
        };
        adapter.refresh();
        adapter
    }

    fn refresh(&mut self) {
        let metric = self.metric;
        let window = self.time_scale.window(&self.series);
        self.window_start = self.series.len() - window.len();
        self.values = window.iter().map(|record| metric.project(record)).collect();
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
        self.refresh();
    }

    pub fn set_time_scale(&mut self, time_scale: TimeScale) {
        self.time_scale = time_scale;
        self.refresh();
    }

    /// The records currently drawn.
    pub fn window(&self) -> &[DailyRecord] {
        &self.series[self.window_start..]
    }

    /// Projected values currently drawn, oldest first.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Projected value at `index` within the window.
    ///
    /// # Panics
    /// If `index >= value_count()`.
    pub fn value_at(&self, index: usize) -> i64 {
        self.check_index(index);
        self.values[index]
    }

    /// Record at `index` within the window.
    ///
    /// # Panics
    /// If `index >= value_count()`.
    pub fn data_at(&self, index: usize) -> &DailyRecord {
        self.check_index(index);
        &self.window()[index]
    }

    /// Display date of the record at `index`.
    ///
    /// # Panics
    /// If `index >= value_count()`.
    pub fn label_at(&self, index: usize) -> String {
        format_display_date(&self.data_at(index).date)
    }

    pub fn get_data(&self, index: usize) -> Option<&DailyRecord> {
        self.window().get(index)
    }

    /// Most recent record in the window.
    pub fn latest(&self) -> Option<&DailyRecord> {
        self.window().last()
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.value_count(),
            "spark index {} out of range for {} values",
            index,
            self.value_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use covid_core::Region;

    fn series(len: usize) -> Arc<[DailyRecord]> {
        let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        (0..len)
            .map(|i| DailyRecord {
                region: Region::Nationwide,
                date: start + chrono::Duration::days(i as i64),
                positive_increase: (i as i64 + 1) * 10,
                negative_increase: (i as i64 + 1) * 100,
                death_increase: i as i64,
            })
            .collect()
    }

    #[test]
    fn test_defaults_show_everything_positive() {
        let adapter = SparkAdapter::new(series(3));
        assert_eq!(adapter.metric(), Metric::Positive);
        assert_eq!(adapter.time_scale(), TimeScale::Max);
        assert_eq!(adapter.values(), &[10, 20, 30]);
        assert_eq!(adapter.value_count(), 3);
        assert_eq!(adapter.value_at(1), 20);
        assert_eq!(adapter.label_at(1), "Mar 02, 2020");
    }

    #[test]
    fn test_time_scale_windows_trailing_entries() {
        let mut adapter = SparkAdapter::new(series(45));
        adapter.set_time_scale(TimeScale::Week);
        assert_eq!(adapter.value_count(), 7);
        assert_eq!(adapter.value_at(0), 390);
        assert_eq!(adapter.data_at(6), &series(45)[44]);

        adapter.set_time_scale(TimeScale::Month);
        assert_eq!(adapter.value_count(), 30);
        assert_eq!(adapter.data_at(0), &series(45)[15]);

        adapter.set_time_scale(TimeScale::Max);
        assert_eq!(adapter.value_count(), 45);
    }

    #[test]
    fn test_metric_change_reprojects() {
        let mut adapter = SparkAdapter::new(series(3));
        adapter.set_metric(Metric::Negative);
        assert_eq!(adapter.values(), &[100, 200, 300]);
        adapter.set_metric(Metric::Death);
        assert_eq!(adapter.values(), &[0, 1, 2]);
    }

    #[test]
    fn test_selection_changes_compose() {
        let mut adapter = SparkAdapter::new(series(10));
        adapter.set_metric(Metric::Death);
        adapter.set_time_scale(TimeScale::Week);
        assert_eq!(adapter.values(), &[3, 4, 5, 6, 7, 8, 9]);
        adapter.set_time_scale(TimeScale::Max);
        adapter.set_metric(Metric::Positive);
        assert_eq!(adapter.value_count(), 10);
        assert_eq!(adapter.value_at(9), 100);
    }

    #[test]
    fn test_short_series_week_keeps_all() {
        let mut adapter = SparkAdapter::new(series(3));
        adapter.set_time_scale(TimeScale::Week);
        assert_eq!(adapter.values(), &[10, 20, 30]);
        assert_eq!(adapter.latest().unwrap().positive_increase, 30);
    }

    #[test]
    fn test_checked_lookups() {
        let adapter = SparkAdapter::new(series(2));
        assert_eq!(adapter.get_data(1).map(|r| r.positive_increase), Some(20));
        assert!(adapter.get_data(2).is_none());
    }

    #[test]
    fn test_empty_series() {
        let adapter = SparkAdapter::new(series(0));
        assert_eq!(adapter.value_count(), 0);
        assert!(adapter.latest().is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_value_at_out_of_range_panics() {
        let mut adapter = SparkAdapter::new(series(40));
        adapter.set_time_scale(TimeScale::Week);
        adapter.value_at(7);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_data_at_out_of_range_panics() {
        SparkAdapter::new(series(1)).data_at(1);
    }
}
