//! peoplefind application module: terminal handling and the async runtime.

/// Runtime event loop, timers and the input thread.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{RunOptions, TokioScheduler, run};
