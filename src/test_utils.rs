//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use tokio::sync::mpsc;

#[cfg(test)]
use crate::logic::{DEFAULT_DELAY, ManualScheduler};
#[cfg(test)]
use crate::state::{AppState, Record, Sex};

#[cfg(test)]
/// What: Build a record with predictable slug and years.
///
/// Inputs:
/// - `name`: Display name (slug is the lower-cased, dashed name)
/// - `sex`: Styling attribute
///
/// Output: Fresh `Record`
pub fn person(name: &str, sex: Sex) -> Record {
    Record {
        slug: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        sex,
        born: 1900,
        died: 1970,
        father_name: None,
        mother_name: None,
    }
}

#[cfg(test)]
/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output:
/// - `(app, clock, selection receiver)` with records `John` (m) and `Joan` (f),
///   the default delay, and a manual clock.
pub fn new_app() -> (
    AppState,
    ManualScheduler,
    mpsc::UnboundedReceiver<Option<Record>>,
) {
    let sched = ManualScheduler::new();
    let (tx, rx) = mpsc::unbounded_channel();
    let app = AppState::new(
        vec![person("John", Sex::Male), person("Joan", Sex::Female)],
        DEFAULT_DELAY,
        Box::new(sched.clone()),
        tx,
    );
    (app, sched, rx)
}

#[cfg(test)]
/// What: Advance the manual clock and feed every expired timer to the controller.
///
/// Output: Number of timers that recomputed suggestions.
pub fn advance(app: &mut AppState, sched: &ManualScheduler, ms: u64) -> usize {
    sched
        .advance(std::time::Duration::from_millis(ms))
        .into_iter()
        .filter(|id| app.autocomplete.handle_timer_fired(*id))
        .count()
}
