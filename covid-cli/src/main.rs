//! COVID tracker CLI - daily national and per-state statistics in the terminal.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "covid-cli",
    version,
    about = "Daily COVID-19 statistics from the COVID Tracking Project"
)]
struct Cli {
    #[command(flatten)]
    connection: covid_cmd::Connection,

    #[command(subcommand)]
    command: covid_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Using API at {}", cli.connection.base_url);
    covid_cmd::run(cli.command, &cli.connection).await
}
