//! Chart header with the region and metric being plotted.

use crate::state::AppState;
use dioxus::prelude::*;

/// Title over the chart, e.g. "CA - Death (Week)".
#[component]
pub fn ChartHeader() -> Element {
    let state = use_context::<AppState>();
    let screen = state.screen.read();
    let Some(adapter) = screen.adapter() else {
        return rsx! {};
    };
    let region = adapter
        .window()
        .first()
        .map(|record| record.region.label().to_string())
        .unwrap_or_else(|| screen.selected_region().label().to_string());
    let title = format!("{} - {} ({})", region, adapter.metric(), adapter.time_scale());
    let subtitle = format!("Daily increase, {} days", adapter.value_count());

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{title}"
            }
            p {
                style: "margin: 0; font-size: 12px; color: #666;",
                "{subtitle}"
            }
        }
    }
}
