//! Modularized state module.
//!
//! Value types live in `types`; the composition root lives in `app_state`.
//! Both are re-exported under `crate::state::*`.

pub mod app_state;
pub mod types;

// Public re-exports to keep import paths short
pub use app_state::AppState;
pub use types::{CellRect, Focus, Hit, Record, RenderedRects, Sex, TestHook};
