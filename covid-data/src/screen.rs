//! State of the tracker screen and the events that change it.
//!
//! Front ends never touch the state directly: fetch completions and user
//! input are turned into `ScreenEvent`s and applied one at a time with
//! `Screen::apply`, on whichever task owns the screen. Rendering only reads.

use crate::spark_adapter::SparkAdapter;
use covid_core::{
    group_by_region, into_ascending, region_choices, DailyRecord, DataSource, FetchError, Metric,
    Region, RegionMap, TimeScale, NATIONWIDE_LABEL,
};
use covid_utils::{dates::format_display_date, numbers::format_count};
use log::{debug, info, warn};
use std::sync::Arc;

/// Progress of one remote fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Load::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading)
    }
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Load::Loading
    }
}

/// Everything that can happen to the screen.
#[derive(Debug, Clone)]
pub enum ScreenEvent {
    /// National series response, as the API lists it (newest first).
    NationalFetched(Result<Vec<DailyRecord>, FetchError>),
    /// All-states response, as the API lists it (newest first).
    RegionsFetched(Result<Vec<DailyRecord>, FetchError>),
    /// A region selector entry was picked.
    RegionSelected(String),
    MetricSelected(Metric),
    TimeScaleSelected(TimeScale),
    /// The pointer is over the chart at this index of the window.
    Scrubbed(usize),
}

/// The two text displays under the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub value: String,
    pub date: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    national: Load<Arc<[DailyRecord]>>,
    regions: Load<RegionMap>,
    selected_region: Region,
    adapter: Option<SparkAdapter>,
    focused: Option<DailyRecord>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::NationalFetched(Ok(records)) => self.on_national(records),
            ScreenEvent::NationalFetched(Err(e)) => {
                warn!("National fetch failed: {}", e);
                self.national = Load::Failed(e.to_string());
            }
            ScreenEvent::RegionsFetched(Ok(records)) => self.on_regions(records),
            ScreenEvent::RegionsFetched(Err(e)) => {
                warn!("State fetch failed: {}", e);
                self.regions = Load::Failed(e.to_string());
            }
            ScreenEvent::RegionSelected(label) => self.select_region(&label),
            ScreenEvent::MetricSelected(metric) => self.select_metric(metric),
            ScreenEvent::TimeScaleSelected(time_scale) => self.select_time_scale(time_scale),
            ScreenEvent::Scrubbed(index) => self.scrub(index),
        }
    }

    fn on_national(&mut self, records: Vec<DailyRecord>) {
        if records.is_empty() {
            warn!("Did not receive any national records");
            return;
        }
        let series: Arc<[DailyRecord]> = into_ascending(records).into();
        info!("Update graph with {} national records", series.len());
        self.national = Load::Ready(series);
        if self.selected_region.is_nationwide() || self.adapter.is_none() {
            self.rebind();
        }
    }

    fn on_regions(&mut self, records: Vec<DailyRecord>) {
        if records.is_empty() {
            warn!("Did not receive any state records");
            return;
        }
        let grouped = group_by_region(into_ascending(records));
        info!("Update region selector with {} regions", grouped.len());
        self.regions = Load::Ready(grouped);
    }

    fn select_region(&mut self, label: &str) {
        self.selected_region = Region::from_label(label);
        debug!("Region selected: {}", self.selected_region);
        self.rebind();
    }

    fn select_metric(&mut self, metric: Metric) {
        match self.adapter.as_mut() {
            Some(adapter) => adapter.set_metric(metric),
            None => debug!("Ignoring metric {} with no chart bound", metric),
        }
    }

    fn select_time_scale(&mut self, time_scale: TimeScale) {
        match self.adapter.as_mut() {
            Some(adapter) => adapter.set_time_scale(time_scale),
            None => debug!("Ignoring time scale {} with no chart bound", time_scale),
        }
    }

    fn scrub(&mut self, index: usize) {
        match self.adapter.as_ref().and_then(|adapter| adapter.get_data(index)) {
            Some(record) => self.focused = Some(record.clone()),
            None => debug!("Ignoring scrub to index {}", index),
        }
    }

    /// Series for a region: its own when loaded and non-empty, the national
    /// one otherwise.
    fn series_for(&self, region: &Region) -> Option<Arc<[DailyRecord]>> {
        let own = self
            .regions
            .ready()
            .and_then(|regions| regions.get(region))
            .filter(|series| !series.is_empty());
        match own {
            Some(series) if !region.is_nationwide() => Some(series.as_slice().into()),
            _ => self.national.ready().cloned(),
        }
    }

    /// Point the chart at the selected region with the default selection,
    /// focusing its most recent record. With no series for the region the
    /// chart is unbound, so it never shows a region other than the selected one.
    fn rebind(&mut self) {
        let Some(series) = self.series_for(&self.selected_region) else {
            debug!("No data yet for {}", self.selected_region);
            self.adapter = None;
            self.focused = None;
            return;
        };
        let adapter = SparkAdapter::new(series);
        self.focused = adapter.latest().cloned();
        self.adapter = Some(adapter);
    }

    pub fn national(&self) -> &Load<Arc<[DailyRecord]>> {
        &self.national
    }

    pub fn regions(&self) -> &Load<RegionMap> {
        &self.regions
    }

    pub fn selected_region(&self) -> &Region {
        &self.selected_region
    }

    pub fn adapter(&self) -> Option<&SparkAdapter> {
        self.adapter.as_ref()
    }

    /// Record shown in the readouts: the last scrubbed one, or the most
    /// recent one after a (re)bind.
    pub fn focused(&self) -> Option<&DailyRecord> {
        self.focused.as_ref()
    }

    pub fn metric(&self) -> Metric {
        self.adapter.as_ref().map(SparkAdapter::metric).unwrap_or_default()
    }

    pub fn time_scale(&self) -> TimeScale {
        self.adapter
            .as_ref()
            .map(SparkAdapter::time_scale)
            .unwrap_or_default()
    }

    /// Entries for the region selector. Only the sentinel until the state
    /// data arrives.
    pub fn region_choices(&self) -> Vec<String> {
        match self.regions.ready() {
            Some(regions) => region_choices(regions),
            None => vec![NATIONWIDE_LABEL.to_string()],
        }
    }

    /// True while no chart can be drawn and a fetch that could provide one is
    /// still outstanding.
    pub fn is_loading(&self) -> bool {
        self.adapter.is_none() && (self.national.is_loading() || self.regions.is_loading())
    }

    /// Failure messages of both fetches, national first.
    pub fn errors(&self) -> Vec<String> {
        [
            self.national.error().map(|e| format!("National data: {}", e)),
            self.regions.error().map(|e| format!("State data: {}", e)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn readout(&self) -> Option<Readout> {
        let metric = self.adapter.as_ref()?.metric();
        let record = self.focused.as_ref()?;
        Some(Readout {
            value: format_count(metric.project(record)),
            date: format_display_date(&record.date),
            color: metric.color(),
        })
    }
}

/// Fetch the national series and wrap the outcome as an event.
pub async fn fetch_national<S: DataSource>(source: &S) -> ScreenEvent {
    ScreenEvent::NationalFetched(source.national_daily().await)
}

/// Fetch every state's series and wrap the outcome as an event.
pub async fn fetch_regions<S: DataSource>(source: &S) -> ScreenEvent {
    ScreenEvent::RegionsFetched(source.states_daily().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use covid_core::StaticSource;

    const US_DAILY: &str = include_str!("../../fixtures/us_daily.json");
    const STATES_DAILY: &str = include_str!("../../fixtures/states_daily.json");

    fn record(code: &str, day: u32, positive: i64, negative: i64, death: i64) -> DailyRecord {
        DailyRecord {
            region: Region::from_code(Some(code)),
            date: NaiveDate::from_ymd_opt(2020, 4, day).unwrap(),
            positive_increase: positive,
            negative_increase: negative,
            death_increase: death,
        }
    }

    /// d1..d3 as the API delivers them, newest first.
    fn national() -> Vec<DailyRecord> {
        vec![
            record("ALL", 3, 30, 12, 3),
            record("ALL", 2, 20, 8, 2),
            record("ALL", 1, 10, 5, 1),
        ]
    }

    fn states() -> Vec<DailyRecord> {
        vec![
            record("NY", 2, 200, 0, 20),
            record("CA", 2, 100, 0, 10),
            record("NY", 1, 150, 0, 15),
            record("CA", 1, 50, 0, 5),
        ]
    }

    fn loaded() -> Screen {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::NationalFetched(Ok(national())));
        screen.apply(ScreenEvent::RegionsFetched(Ok(states())));
        screen
    }

    #[test]
    fn test_starts_loading() {
        let screen = Screen::new();
        assert!(screen.is_loading());
        assert!(screen.adapter().is_none());
        assert!(screen.readout().is_none());
        assert_eq!(screen.region_choices(), vec![NATIONWIDE_LABEL]);
        assert!(screen.errors().is_empty());
    }

    #[test]
    fn test_national_scenario_and_scrub() {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::NationalFetched(Ok(national())));

        let adapter = screen.adapter().unwrap();
        assert_eq!(adapter.values(), &[10, 20, 30]);
        assert_eq!(adapter.metric(), Metric::Positive);
        assert_eq!(adapter.time_scale(), TimeScale::Max);
        assert_eq!(screen.readout().unwrap().value, "30");

        screen.apply(ScreenEvent::Scrubbed(1));
        let readout = screen.readout().unwrap();
        assert_eq!(readout.value, "20");
        assert_eq!(readout.date, "Apr 02, 2020");
        assert_eq!(readout.color, Metric::Positive.color());
        // scrubbing never changes the window
        assert_eq!(screen.adapter().unwrap().values(), &[10, 20, 30]);
    }

    #[test]
    fn test_week_with_three_entries_shows_all() {
        let mut screen = loaded();
        screen.apply(ScreenEvent::TimeScaleSelected(TimeScale::Week));
        assert_eq!(screen.adapter().unwrap().values(), &[10, 20, 30]);
        assert_eq!(screen.time_scale(), TimeScale::Week);
    }

    #[test]
    fn test_region_choices_sorted_with_sentinel() {
        let screen = loaded();
        assert_eq!(
            screen.region_choices(),
            vec!["ALL (Nationwide)", "CA", "NY"]
        );
    }

    #[test]
    fn test_select_region_binds_its_series_and_resets_selection() {
        let mut screen = loaded();
        screen.apply(ScreenEvent::MetricSelected(Metric::Death));
        screen.apply(ScreenEvent::TimeScaleSelected(TimeScale::Week));

        screen.apply(ScreenEvent::RegionSelected("NY".to_string()));
        let adapter = screen.adapter().unwrap();
        assert_eq!(adapter.values(), &[150, 200]);
        assert_eq!(adapter.metric(), Metric::Positive);
        assert_eq!(adapter.time_scale(), TimeScale::Max);
        assert_eq!(screen.selected_region(), &Region::State("NY".to_string()));
        assert_eq!(screen.readout().unwrap().value, "200");

        screen.apply(ScreenEvent::RegionSelected(NATIONWIDE_LABEL.to_string()));
        assert_eq!(screen.adapter().unwrap().values(), &[10, 20, 30]);
    }

    #[test]
    fn test_unknown_region_falls_back_to_national() {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::NationalFetched(Ok(national())));
        screen.apply(ScreenEvent::RegionsFetched(Ok(vec![record("NY", 1, 1, 1, 1)])));

        screen.apply(ScreenEvent::RegionSelected("CA".to_string()));
        assert_eq!(screen.adapter().unwrap().values(), &[10, 20, 30]);
    }

    #[test]
    fn test_metric_change_keeps_focused_record() {
        let mut screen = loaded();
        screen.apply(ScreenEvent::Scrubbed(0));
        screen.apply(ScreenEvent::MetricSelected(Metric::Negative));

        let readout = screen.readout().unwrap();
        assert_eq!(readout.value, "5");
        assert_eq!(readout.date, "Apr 01, 2020");
        assert_eq!(readout.color, Metric::Negative.color());
        assert_eq!(screen.adapter().unwrap().values(), &[5, 8, 12]);
    }

    #[test]
    fn test_out_of_range_scrub_is_ignored() {
        let mut screen = loaded();
        screen.apply(ScreenEvent::Scrubbed(3));
        assert_eq!(screen.readout().unwrap().value, "30");
    }

    #[test]
    fn test_events_before_data_are_ignored() {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::MetricSelected(Metric::Death));
        screen.apply(ScreenEvent::TimeScaleSelected(TimeScale::Week));
        screen.apply(ScreenEvent::Scrubbed(0));
        screen.apply(ScreenEvent::RegionSelected("CA".to_string()));
        assert!(screen.adapter().is_none());

        screen.apply(ScreenEvent::NationalFetched(Ok(national())));
        let adapter = screen.adapter().unwrap();
        assert_eq!(adapter.metric(), Metric::Positive);
        assert_eq!(adapter.values(), &[10, 20, 30]);
    }

    #[test]
    fn test_regions_before_national() {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::RegionsFetched(Ok(states())));
        assert!(screen.is_loading());
        assert_eq!(screen.region_choices(), vec!["ALL (Nationwide)", "CA", "NY"]);

        screen.apply(ScreenEvent::NationalFetched(Ok(national())));
        assert!(!screen.is_loading());
        assert_eq!(screen.adapter().unwrap().values(), &[10, 20, 30]);
    }

    #[test]
    fn test_late_national_does_not_replace_state_chart() {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::RegionsFetched(Ok(states())));
        screen.apply(ScreenEvent::RegionSelected("CA".to_string()));
        assert_eq!(screen.adapter().unwrap().values(), &[50, 100]);

        screen.apply(ScreenEvent::NationalFetched(Ok(national())));
        assert_eq!(screen.adapter().unwrap().values(), &[50, 100]);
    }

    #[test]
    fn test_empty_responses_keep_prior_state() {
        let mut screen = loaded();
        screen.apply(ScreenEvent::NationalFetched(Ok(Vec::new())));
        screen.apply(ScreenEvent::RegionsFetched(Ok(Vec::new())));
        assert_eq!(screen.adapter().unwrap().values(), &[10, 20, 30]);
        assert_eq!(screen.region_choices().len(), 3);
    }

    #[test]
    fn test_failures_are_surfaced() {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::NationalFetched(Err(FetchError::Status(500))));
        assert!(screen.is_loading());
        screen.apply(ScreenEvent::RegionsFetched(Err(FetchError::EmptyBody)));

        assert!(!screen.is_loading());
        assert!(screen.adapter().is_none());
        assert_eq!(
            screen.errors(),
            vec![
                "National data: unexpected response status 500".to_string(),
                "State data: did not receive a valid response body".to_string(),
            ]
        );
    }

    #[test]
    fn test_region_failure_keeps_national_chart() {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::RegionsFetched(Err(FetchError::Transport("dns".into()))));
        screen.apply(ScreenEvent::NationalFetched(Ok(national())));
        assert_eq!(screen.adapter().unwrap().values(), &[10, 20, 30]);
        assert_eq!(screen.region_choices(), vec![NATIONWIDE_LABEL]);
        assert_eq!(screen.errors().len(), 1);
    }

    #[test]
    fn test_select_nationwide_after_national_failure_unbinds_chart() {
        let mut screen = Screen::new();
        screen.apply(ScreenEvent::NationalFetched(Err(FetchError::Status(500))));
        screen.apply(ScreenEvent::RegionsFetched(Ok(vec![
            record("CA", 2, 100, 0, 10),
            record("CA", 1, 50, 0, 5),
        ])));
        screen.apply(ScreenEvent::RegionSelected("CA".to_string()));
        assert_eq!(screen.adapter().unwrap().values(), &[50, 100]);

        screen.apply(ScreenEvent::RegionSelected(NATIONWIDE_LABEL.to_string()));
        assert_eq!(screen.selected_region(), &Region::Nationwide);
        assert!(screen.adapter().is_none());
        assert!(screen.focused().is_none());
        assert!(screen.readout().is_none());
        assert!(!screen.is_loading());
        assert_eq!(
            screen.errors(),
            vec!["National data: unexpected response status 500".to_string()]
        );

        screen.apply(ScreenEvent::RegionSelected("CA".to_string()));
        let adapter = screen.adapter().unwrap();
        assert_eq!(adapter.window()[0].region, *screen.selected_region());
    }

    #[tokio::test]
    async fn test_fetch_helpers_with_fixtures() {
        let source = StaticSource::from_json(US_DAILY, STATES_DAILY);
        let mut screen = Screen::new();
        // the state response lands first
        screen.apply(fetch_regions(&source).await);
        screen.apply(fetch_national(&source).await);

        let adapter = screen.adapter().unwrap();
        assert_eq!(adapter.values(), &[65487, 68787, 60015, 41835]);
        assert_eq!(screen.readout().unwrap().value, "41,835");
        assert_eq!(screen.readout().unwrap().date, "Mar 08, 2021");
        assert_eq!(screen.region_choices(), vec![NATIONWIDE_LABEL, "AK", "CA", "NY"]);

        screen.apply(ScreenEvent::RegionSelected("AK".to_string()));
        assert_eq!(screen.adapter().unwrap().values(), &[-5, 0, 0]);
        screen.apply(ScreenEvent::MetricSelected(Metric::Death));
        assert_eq!(screen.adapter().unwrap().values(), &[0, 0, 0]);
    }
}
