//! Runs both fetches and applies their results to a `Screen`.

use covid_core::DataSource;
use covid_data::{fetch_national, fetch_regions, Screen};
use log::debug;
use tokio::sync::mpsc;

/// Fetch the national and per-state series concurrently.
///
/// Each fetch posts its event to a channel as soon as it completes, in
/// whatever order that happens; a single consumer applies them to the screen.
pub async fn load_screen<S: DataSource>(source: &S) -> Screen {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let national_tx = tx.clone();

    let national = async move {
        let _ = national_tx.send(fetch_national(source).await);
    };
    let regions = async move {
        let _ = tx.send(fetch_regions(source).await);
    };

    let mut screen = Screen::new();
    let apply = async {
        while let Some(event) = rx.recv().await {
            debug!("Applying {:?}", EventKind(&event));
            screen.apply(event);
        }
    };

    tokio::join!(national, regions, apply);
    screen
}

/// Debug view of an event that leaves out the record payloads.
struct EventKind<'a>(&'a covid_data::ScreenEvent);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use covid_data::ScreenEvent::*;
        match self.0 {
            NationalFetched(Ok(records)) => write!(f, "NationalFetched({} records)", records.len()),
            RegionsFetched(Ok(records)) => write!(f, "RegionsFetched({} records)", records.len()),
            other => write!(f, "{:?}", other),
        }
    }
}
