//! Radio group for the plotted metric.

use crate::state::AppState;
use covid_core::Metric;
use covid_data::ScreenEvent;
use dioxus::prelude::*;

#[component]
pub fn MetricSelector() -> Element {
    let state = use_context::<AppState>();
    let current = state.screen.read().metric();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            for metric in Metric::ALL {
                label {
                    style: "color: {metric.color()}; font-weight: bold;",
                    input {
                        r#type: "radio",
                        name: "metric",
                        value: "{metric}",
                        checked: metric == current,
                        onchange: move |_: Event<FormData>| state.dispatch(ScreenEvent::MetricSelected(metric)),
                    }
                    " {metric}"
                }
            }
        }
    }
}
