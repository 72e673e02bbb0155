use crate::daily_record::DailyRecord;
use std::{fmt, future::Future};

/// Errors that can occur when fetching daily records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout, ...).
    Transport(String),
    /// The server answered with a non-200 status.
    Status(u16),
    /// The body was empty, `null` or `[]`.
    EmptyBody,
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "request failed: {}", e),
            FetchError::Status(status) => write!(f, "unexpected response status {}", status),
            FetchError::EmptyBody => write!(f, "did not receive a valid response body"),
            FetchError::Decode(e) => write!(f, "failed to decode response: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// The two read-only endpoints the tracker reads from.
///
/// Both return records newest first, exactly as the API lists them.
pub trait DataSource {
    /// Daily records for the national aggregate.
    fn national_daily(&self) -> impl Future<Output = Result<Vec<DailyRecord>, FetchError>>;

    /// Daily records for every state, all regions interleaved.
    fn states_daily(&self) -> impl Future<Output = Result<Vec<DailyRecord>, FetchError>>;
}

/// Decode a JSON array response body into records.
pub fn decode_body(body: &str) -> Result<Vec<DailyRecord>, FetchError> {
    let trimmed = body.trim();
    if trimmed.len() <= 2 || trimmed == "null" {
        return Err(FetchError::EmptyBody);
    }
    let records: Option<Vec<DailyRecord>> =
        serde_json::from_str(trimmed).map_err(|e| FetchError::Decode(e.to_string()))?;
    match records {
        Some(records) if !records.is_empty() => Ok(records),
        _ => Err(FetchError::EmptyBody),
    }
}

/// A `DataSource` that serves canned responses from memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    national: Result<Vec<DailyRecord>, FetchError>,
    states: Result<Vec<DailyRecord>, FetchError>,
}

impl StaticSource {
    pub fn new(
        national: Result<Vec<DailyRecord>, FetchError>,
        states: Result<Vec<DailyRecord>, FetchError>,
    ) -> Self {
        Self { national, states }
    }

    /// Serve two JSON response bodies, decoded up front.
    pub fn from_json(national_body: &str, states_body: &str) -> Self {
        Self::new(decode_body(national_body), decode_body(states_body))
    }
}

impl DataSource for StaticSource {
    async fn national_daily(&self) -> Result<Vec<DailyRecord>, FetchError> {
        self.national.clone()
    }

    async fn states_daily(&self) -> Result<Vec<DailyRecord>, FetchError> {
        self.states.clone()
    }
}
