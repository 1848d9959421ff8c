//! Debounce timer plumbing.
//!
//! The controller never talks to a clock directly. It asks a [`Scheduler`] for
//! a timer and later receives the fired [`TimerId`] back from the host event
//! loop. The runtime uses a tokio-backed scheduler; tests and headless replay
//! use [`ManualScheduler`], which only advances when told to.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Opaque handle for one scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// What: Wrap a raw id. Schedulers hand these out monotonically.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// What: Return the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Source of one-shot timers.
///
/// When a timer elapses the host delivers its id to the owner; the scheduler
/// itself never calls back into the owner.
pub trait Scheduler: Send {
    /// What: Start a one-shot timer.
    ///
    /// Inputs:
    /// - `delay`: Time until the timer fires
    ///
    /// Output:
    /// - Fresh id that will be delivered once the delay elapses.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// What: Cancel a timer so it is never delivered.
    ///
    /// Details:
    /// - Unknown and already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Virtual clock behind [`ManualScheduler`].
#[derive(Debug, Default)]
pub struct ManualClock {
    /// Elapsed virtual time.
    now: Duration,
    /// Last id handed out.
    next_id: u64,
    /// Pending timers and their deadlines.
    pending: BTreeMap<TimerId, Duration>,
    /// Total timers ever scheduled.
    scheduled: usize,
    /// Total timers cancelled while still pending.
    cancelled: usize,
}

impl ManualClock {
    /// What: Move virtual time forward and collect timers that expired.
    ///
    /// Inputs:
    /// - `by`: Amount of virtual time to add
    ///
    /// Output:
    /// - Expired ids ordered by deadline (ties by id); they are removed from pending.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(Duration, TimerId)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.pending.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Total number of `schedule` calls.
    #[must_use]
    pub const fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    /// Total number of effective `cancel` calls.
    #[must_use]
    pub const fn cancelled_count(&self) -> usize {
        self.cancelled
    }

    /// Whether `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Cloning shares the clock, so a test can hand one clone to the controller
/// and keep another to advance time and inspect counters.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    /// Shared clock state.
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    /// What: Create a scheduler whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Lock the shared clock for inspection or advancing.
    ///
    /// Details:
    /// - A poisoned lock is recovered; the clock holds plain data only.
    pub fn clock(&self) -> MutexGuard<'_, ManualClock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// What: Shorthand for `clock().advance(by)`.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        self.clock().advance(by)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let mut clock = self.clock();
        clock.next_id += 1;
        clock.scheduled += 1;
        let id = TimerId::new(clock.next_id);
        let deadline = clock.now + delay;
        clock.pending.insert(id, deadline);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let mut clock = self.clock();
        if clock.pending.remove(&id).is_some() {
            clock.cancelled += 1;
        }
    }
}
