use crate::{
    daily_record::DailyRecord,
    source::{decode_body, DataSource, FetchError},
};
use log::{info, warn};
use reqwest::{Client, StatusCode};

/// Public COVID Tracking Project API, version 1.
pub const BASE_URL: &str = "https://api.covidtracking.com/v1/";

/// National aggregate, one record per day, newest first.
pub const NATIONAL_DAILY_PATH: &str = "us/daily.json";

/// Every state's daily records, newest first.
pub const STATES_DAILY_PATH: &str = "states/daily.json";

/// HTTP client for the COVID Tracking API.
#[derive(Debug, Clone)]
pub struct CovidTrackingClient {
    client: Client,
    base_url: String,
}

impl CovidTrackingClient {
    /// Wrap a configured reqwest client. A missing trailing slash on
    /// `base_url` is added so endpoint paths join cleanly.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_daily(&self, path: &str) -> Result<Vec<DailyRecord>, FetchError> {
        let url = self.endpoint(path);
        info!("Fetching {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request failed for {}: {}", url, e);
            FetchError::Transport(e.to_string())
        })?;
        if response.status() != StatusCode::OK {
            warn!("Bad response status for {}: {}", url, response.status());
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read response body for {}: {}", url, e);
            FetchError::Transport(e.to_string())
        })?;
        let records = decode_body(&body).inspect_err(|e| warn!("{}: {}", url, e))?;
        info!("Received {} records from {}", records.len(), url);
        Ok(records)
    }
}

impl Default for CovidTrackingClient {
    fn default() -> Self {
        Self::new(Client::new(), BASE_URL)
    }
}

impl DataSource for CovidTrackingClient {
    async fn national_daily(&self) -> Result<Vec<DailyRecord>, FetchError> {
        self.get_daily(NATIONAL_DAILY_PATH).await
    }

    async fn states_daily(&self) -> Result<Vec<DailyRecord>, FetchError> {
        self.get_daily(STATES_DAILY_PATH).await
    }
}
