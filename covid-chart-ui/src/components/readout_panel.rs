//! Value and date readouts under the chart.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the focused record: the most recent one until the user scrubs.
#[component]
pub fn ReadoutPanel() -> Element {
    let state = use_context::<AppState>();
    let Some(readout) = state.screen.read().readout() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "margin: 12px 0; display: flex; justify-content: space-between; align-items: baseline; width: 600px;",
            span {
                style: "font-size: 28px; font-weight: bold; color: {readout.color};",
                "{readout.value}"
            }
            span {
                style: "font-size: 14px; color: #666;",
                "{readout.date}"
            }
        }
    }
}
