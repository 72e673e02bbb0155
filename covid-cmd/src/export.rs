//! `export` subcommand: the displayed window as CSV.

use crate::{load::load_screen, show::apply_selection, Selection};
use covid_core::DataSource;
use covid_data::SparkAdapter;
use covid_utils::dates::format_date;
use log::info;
use serde::Serialize;
use std::{fs::File, io};

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    date: String,
    region: &'a str,
    metric: &'static str,
    value: i64,
}

/// Write one row per window entry, oldest first. Returns the row count.
pub fn write_rows<W: io::Write>(adapter: &SparkAdapter, writer: W) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let metric = adapter.metric();
    for (record, value) in adapter.window().iter().zip(adapter.values()) {
        wtr.serialize(ExportRow {
            date: format_date(&record.date),
            region: record.region.code(),
            metric: metric.label(),
            value: *value,
        })?;
    }
    wtr.flush()?;
    Ok(adapter.value_count())
}

pub async fn run_export<S: DataSource>(
    source: &S,
    selection: &Selection,
    output: &str,
) -> anyhow::Result<()> {
    let mut screen = load_screen(source).await;
    apply_selection(&mut screen, selection)?;
    let Some(adapter) = screen.adapter() else {
        anyhow::bail!("No data to export");
    };
    let file = File::create(output)?;
    let count = write_rows(adapter, file)?;
    info!("Wrote {} rows to {}", count, output);
    Ok(())
}
