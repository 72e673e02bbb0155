//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the screen in a Signal and is provided once with
//! `use_context_provider`. Components read it with `use_context::<AppState>()`
//! and change it only through `dispatch`.

use covid_data::{Screen, ScreenEvent};
use dioxus::prelude::*;
use log::debug;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Everything the page renders
    pub screen: Signal<Screen>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Signal::new(Screen::new()),
        }
    }

    /// Apply one event to the screen, re-rendering every reader.
    pub fn dispatch(mut self, event: ScreenEvent) {
        if let ScreenEvent::Scrubbed(index) = event {
            debug!("Scrubbed to {}", index);
        }
        self.screen.write().apply(event);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
