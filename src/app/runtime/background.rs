use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the blocking thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true` no thread is started
/// - `event_tx`: Destination for every event read
/// - `cancelled`: Exit flag checked between polls
///
/// Details:
/// - Polls with a short timeout so the flag is noticed promptly on exit.
/// - Read errors are skipped; a closed channel ends the thread.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::trace!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::trace!(error = %e, "terminal poll failed"),
            }
        }
        tracing::debug!("input thread stopped");
    });
}
