//! Command implementations for the COVID tracker CLI.
//!
//! Every subcommand drives the same `Screen` the web app renders, so the
//! output here matches what the chart would show for the same selection.

use clap::{Args, Subcommand};
use covid_core::{api::CovidTrackingClient, Metric, TimeScale, NATIONWIDE_LABEL};
use std::time::Duration;

pub mod export;
pub mod load;
pub mod show;
pub mod sparkline;

/// Where and how to reach the API.
#[derive(Args, Debug, Clone)]
pub struct Connection {
    /// Base URL of the COVID Tracking API
    #[arg(long, global = true, default_value = covid_core::api::BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout_secs: u64,
}

impl Connection {
    pub fn client(&self) -> anyhow::Result<CovidTrackingClient> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(CovidTrackingClient::new(http, &self.base_url))
    }
}

/// Region, metric and time scale to display.
#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Region code (e.g. CA), or ALL for the national series
    #[arg(short, long, default_value = NATIONWIDE_LABEL)]
    pub region: String,

    /// positive, negative or death
    #[arg(short, long, default_value = "positive")]
    pub metric: Metric,

    /// week, month or max
    #[arg(short, long, default_value = "max")]
    pub time_scale: TimeScale,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the spark line and readouts for a selection
    Show {
        #[command(flatten)]
        selection: Selection,

        /// Index within the displayed window to focus (default: most recent)
        #[arg(short, long)]
        scrub: Option<usize>,

        /// Maximum spark line width in characters
        #[arg(short, long, default_value_t = 60)]
        width: usize,
    },

    /// List the entries of the region selector
    Regions,

    /// Write the displayed window as CSV (date,region,metric,value)
    Export {
        #[command(flatten)]
        selection: Selection,

        /// Output path for the CSV file
        #[arg(short, long)]
        output: String,
    },
}

pub async fn run(command: Command, connection: &Connection) -> anyhow::Result<()> {
    let client = connection.client()?;
    match command {
        Command::Show {
            selection,
            scrub,
            width,
        } => show::run_show(&client, &selection, scrub, width).await,
        Command::Regions => show::run_regions(&client).await,
        Command::Export { selection, output } => {
            export::run_export(&client, &selection, &output).await
        }
    }
}
