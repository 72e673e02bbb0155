use crate::region::Region;
use chrono::NaiveDate;
use covid_utils::dates::{parse_date_compact, parse_timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur when decoding a record from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Neither `dateChecked` nor `date` was present.
    MissingDate,
    InvalidTimestamp(String),
    InvalidDate(u32),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MissingDate => write!(f, "record has no date"),
            RecordError::InvalidTimestamp(ts) => write!(f, "invalid dateChecked timestamp: {}", ts),
            RecordError::InvalidDate(date) => write!(f, "invalid compact date: {}", date),
        }
    }
}

impl std::error::Error for RecordError {}

/// One day of statistics for one region.
///
/// The increases are the new cases/tests/deaths reported that day, not
/// cumulative totals. They can be negative on days the source corrected
/// earlier reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDailyRecord", rename_all = "camelCase")]
pub struct DailyRecord {
    #[serde(rename = "state")]
    pub region: Region,
    pub date: NaiveDate,
    pub positive_increase: i64,
    pub negative_increase: i64,
    pub death_increase: i64,
}

/// The record as it appears on the wire. Every field is optional there.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDailyRecord {
    state: Option<String>,
    date: Option<u32>,
    date_checked: Option<String>,
    positive_increase: Option<i64>,
    negative_increase: Option<i64>,
    death_increase: Option<i64>,
}

impl TryFrom<RawDailyRecord> for DailyRecord {
    type Error = RecordError;

    fn try_from(raw: RawDailyRecord) -> Result<Self, Self::Error> {
        let date = record_date(raw.date_checked.as_deref(), raw.date)?;
        Ok(DailyRecord {
            region: Region::from_code(raw.state.as_deref()),
            date,
            positive_increase: raw.positive_increase.unwrap_or(0),
            negative_increase: raw.negative_increase.unwrap_or(0),
            death_increase: raw.death_increase.unwrap_or(0),
        })
    }
}

/// `dateChecked` wins when it parses; the compact `date` key is the fallback.
fn record_date(date_checked: Option<&str>, date: Option<u32>) -> Result<NaiveDate, RecordError> {
    if let Some(timestamp) = date_checked.and_then(|ts| parse_timestamp(ts).ok()) {
        return Ok(timestamp.date());
    }
    match (date, date_checked) {
        (Some(compact), _) => {
            parse_date_compact(&compact.to_string()).map_err(|_| RecordError::InvalidDate(compact))
        }
        (None, Some(ts)) => Err(RecordError::InvalidTimestamp(ts.to_string())),
        (None, None) => Err(RecordError::MissingDate),
    }
}

/// The API lists newest first; flip a response into ascending date order.
pub fn into_ascending(mut records: Vec<DailyRecord>) -> Vec<DailyRecord> {
    records.reverse();
    records
}
