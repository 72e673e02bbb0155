//! Dropdown selector for choosing the region.

use crate::state::AppState;
use covid_data::ScreenEvent;
use dioxus::prelude::*;

/// Region dropdown. The nationwide entry is always first; state codes follow
/// once the state data has arrived.
#[component]
pub fn RegionSelector() -> Element {
    let state = use_context::<AppState>();
    let (choices, selected) = {
        let screen = state.screen.read();
        (
            screen.region_choices(),
            screen.selected_region().label().to_string(),
        )
    };

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(ScreenEvent::RegionSelected(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Region: "
            }
            select {
                id: "region-select",
                onchange: on_change,
                for choice in choices.into_iter() {
                    option {
                        value: "{choice}",
                        selected: choice == selected,
                        "{choice}"
                    }
                }
            }
        }
    }
}
