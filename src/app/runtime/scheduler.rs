//! Tokio-backed debounce timers.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::logic::{Scheduler, TimerId};

/// [`Scheduler`] that runs each timer as a sleeping tokio task.
///
/// A fired timer sends its id on `fired_tx`; the event loop hands it to the
/// controller. Cancelling aborts the task, so a cancelled id is never sent.
#[derive(Debug)]
pub struct TokioScheduler {
    /// Delivery channel for fired ids.
    fired_tx: mpsc::UnboundedSender<TimerId>,
    /// Live timer tasks keyed by id.
    tasks: HashMap<TimerId, JoinHandle<()>>,
    /// Last id handed out.
    next_id: u64,
}

impl TokioScheduler {
    /// What: Create a scheduler delivering fired ids on `fired_tx`.
    ///
    /// Details:
    /// - Must be used from within a tokio runtime; `schedule` spawns tasks.
    #[must_use]
    pub fn new(fired_tx: mpsc::UnboundedSender<TimerId>) -> Self {
        Self {
            fired_tx,
            tasks: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of timer tasks that have not finished yet.
    #[must_use]
    pub fn live_tasks(&self) -> usize {
        self.tasks.values().filter(|h| !h.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, h| !h.is_finished());
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        let tx = self.fired_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the loop already exited.
            let _ = tx.send(id);
        });
        self.tasks.insert(id, handle);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
