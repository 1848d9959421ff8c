use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::logic::TimerId;
use crate::state::Record;

/// What: Channels connecting the input thread, timers and the controller to the event loop.
///
/// Details:
/// - Senders are cloned into producers; the loop owns every receiver.
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of `event_tx`.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Fired debounce timers.
    pub timer_tx: mpsc::UnboundedSender<TimerId>,
    /// Receiving side of `timer_tx`.
    pub timer_rx: mpsc::UnboundedReceiver<TimerId>,
    /// Selection changes emitted by the controller callback.
    pub selection_tx: mpsc::UnboundedSender<Option<Record>>,
    /// Receiving side of `selection_tx`.
    pub selection_rx: mpsc::UnboundedReceiver<Option<Record>>,
}

impl Channels {
    /// What: Create every channel used by the runtime.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (selection_tx, selection_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            timer_tx,
            timer_rx,
            selection_tx,
            selection_rx,
        }
    }
}
