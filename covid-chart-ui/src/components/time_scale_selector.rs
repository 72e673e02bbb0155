//! Radio group for the time window.

use crate::state::AppState;
use covid_core::TimeScale;
use covid_data::ScreenEvent;
use dioxus::prelude::*;

#[component]
pub fn TimeScaleSelector() -> Element {
    let state = use_context::<AppState>();
    let current = state.screen.read().time_scale();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            for time_scale in TimeScale::ALL {
                label {
                    input {
                        r#type: "radio",
                        name: "time-scale",
                        value: "{time_scale}",
                        checked: time_scale == current,
                        onchange: move |_: Event<FormData>| state.dispatch(ScreenEvent::TimeScaleSelected(time_scale)),
                    }
                    " {time_scale}"
                }
            }
        }
    }
}
