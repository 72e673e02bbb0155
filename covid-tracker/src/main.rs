//! COVID-19 Tracker
//!
//! One screen with a spark line of daily increases for the US or a single
//! state, a region dropdown, metric and time-window radio groups, and value
//! and date readouts that follow the pointer across the chart.
//!
//! Data flow:
//! 1. On mount: spawn the national and the all-states fetch side by side.
//! 2. Each fetch dispatches its result to the shared `Screen` as it lands,
//!    so the chart appears as soon as the national series is in.
//! 3. Every selector and pointer move dispatches an event; components
//!    re-render from the screen signal.

use covid_chart_ui::components::{
    ChartHeader, ErrorDisplay, LoadingSpinner, MetricSelector, ReadoutPanel, RegionSelector,
    SparkChart, TimeScaleSelector,
};
use covid_chart_ui::state::AppState;
use covid_core::api::CovidTrackingClient;
use covid_data::{fetch_national, fetch_regions};
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting COVID tracker");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-tracker-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Fetch both series once on mount
    use_effect(move || {
        let client = CovidTrackingClient::default();
        let national_client = client.clone();
        spawn(async move {
            state.dispatch(fetch_national(&national_client).await);
        });
        spawn(async move {
            state.dispatch(fetch_regions(&client).await);
        });
    });

    let (errors, loading, has_chart) = {
        let screen = state.screen.read();
        (
            screen.errors(),
            screen.is_loading(),
            screen.adapter().is_some(),
        )
    };

    rsx! {
        div {
            style: "max-width: 640px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "font-size: 22px; color: #2c3e50; margin-bottom: 8px;",
                "COVID-19 Tracker"
            }

            ErrorDisplay { messages: errors }

            RegionSelector {}

            if loading {
                LoadingSpinner {}
            } else if has_chart {
                ChartHeader {}
                SparkChart {}
                ReadoutPanel {}
                MetricSelector {}
                TimeScaleSelector {}

                p {
                    style: "font-size: 11px; color: #888; margin-top: 4px;",
                    "Source: The COVID Tracking Project"
                }
            }
        }
    }
}
