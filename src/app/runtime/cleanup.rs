use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Tear down application state on exit.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels
///
/// Details:
/// - Unmounts the controller, which cancels its pending timer and drops the
///   outside-click listener.
/// - Signals the input thread to exit.
pub fn cleanup_on_exit(app: &mut AppState, channels: &Channels) {
    tracing::debug!("main loop exited, cleaning up");
    app.autocomplete.unmount();
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}
