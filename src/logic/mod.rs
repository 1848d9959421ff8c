//! Core non-UI logic split into modular submodules.

pub mod autocomplete;
pub mod listener;
pub mod matcher;
pub mod timer;

// Re-export public APIs so callers can use `crate::logic::...` directly
pub use autocomplete::{
    Autocomplete, DEFAULT_DELAY, DropdownView, PointerOutcome, SelectionCallback,
};
pub use listener::{ListenerGuard, ListenerId, PointerHub};
pub use matcher::{is_blank, match_records};
pub use timer::{ManualClock, ManualScheduler, Scheduler, TimerId};
