//! `show` and `regions` subcommands.

use crate::{
    load::load_screen,
    sparkline::{marker, sparkline},
    Selection,
};
use anyhow::bail;
use covid_core::{DataSource, Region, TimeScale};
use covid_data::{fetch_regions, Screen, ScreenEvent};
use log::{info, warn};

/// Apply a selection the way a user would pick it on screen: region first
/// (which resets metric and time scale), then metric, then time scale.
pub fn apply_selection(screen: &mut Screen, selection: &Selection) -> anyhow::Result<()> {
    let region = Region::from_label(&selection.region);
    let known = region.is_nationwide()
        || screen
            .regions()
            .ready()
            .is_some_and(|regions| regions.contains_key(&region));
    if !known {
        warn!("No data for region {}, showing the national series", region);
    }

    screen.apply(ScreenEvent::RegionSelected(selection.region.clone()));
    screen.apply(ScreenEvent::MetricSelected(selection.metric));
    screen.apply(ScreenEvent::TimeScaleSelected(selection.time_scale));

    if screen.adapter().is_none() {
        bail!("No data to show: {}", screen.errors().join("; "));
    }
    Ok(())
}

/// Focus window index `index`, as dragging over the chart would.
pub fn scrub(screen: &mut Screen, index: usize) {
    let count = screen.adapter().map_or(0, |adapter| adapter.value_count());
    if index >= count {
        warn!(
            "Scrub index {} is outside the {} displayed values, keeping the most recent",
            index, count
        );
    }
    screen.apply(ScreenEvent::Scrubbed(index));
}

fn describe_time_scale(time_scale: TimeScale, count: usize) -> String {
    match time_scale.num_days() {
        Some(days) => format!("{} (last {} days, {} shown)", time_scale, days, count),
        None => format!("{} (all {} days)", time_scale, count),
    }
}

/// Lines printed by `show`.
pub fn render_screen(screen: &Screen, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for error in screen.errors() {
        lines.push(format!("warning: {}", error));
    }
    let Some(adapter) = screen.adapter() else {
        return lines;
    };

    let shown = adapter
        .window()
        .first()
        .map(|record| record.region.label().to_string())
        .unwrap_or_else(|| screen.selected_region().label().to_string());
    lines.push(format!("{:<12}{}", "Region:", shown));
    lines.push(format!("{:<12}{}", "Metric:", adapter.metric()));
    lines.push(format!(
        "{:<12}{}",
        "Time scale:",
        describe_time_scale(adapter.time_scale(), adapter.value_count())
    ));
    lines.push(String::new());
    lines.push(sparkline(adapter.values(), width));

    let focused_index = screen
        .focused()
        .and_then(|focused| adapter.window().iter().position(|r| r.date == focused.date));
    if let Some(index) = focused_index {
        lines.push(marker(index, adapter.value_count(), width));
    }

    if let Some(readout) = screen.readout() {
        lines.push(String::new());
        lines.push(format!("{:<12}{}", format!("{}:", adapter.metric()), readout.value));
        lines.push(format!("{:<12}{}", "Date:", readout.date));
    }
    lines
}

pub async fn run_show<S: DataSource>(
    source: &S,
    selection: &Selection,
    scrub_index: Option<usize>,
    width: usize,
) -> anyhow::Result<()> {
    let mut screen = load_screen(source).await;
    apply_selection(&mut screen, selection)?;
    if let Some(index) = scrub_index {
        scrub(&mut screen, index);
    }
    for line in render_screen(&screen, width) {
        println!("{}", line);
    }
    Ok(())
}

pub async fn run_regions<S: DataSource>(source: &S) -> anyhow::Result<()> {
    let mut screen = Screen::new();
    screen.apply(fetch_regions(source).await);
    if let Some(e) = screen.regions().error() {
        bail!("State data unavailable: {}", e);
    }
    let choices = screen.region_choices();
    info!("{} region choices", choices.len());
    for choice in choices {
        println!("{}", choice);
    }
    Ok(())
}
