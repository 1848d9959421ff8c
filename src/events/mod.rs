//! Event handling layer for peoplefind's TUI (modularized).
//!
//! This module exposes `handle_event` and delegates search-box keys and
//! mouse handling to submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::state::AppState;

mod mouse;
mod search;
mod utils;

pub use mouse::handle_mouse_event;
pub use search::handle_search_key;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Only key presses are handled (repeats/releases are ignored).
/// - `Ctrl+C` and `Ctrl+Q` quit regardless of focus.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if ke.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(ke.code, KeyCode::Char('c' | 'q'))
            {
                tracing::info!("quit requested");
                return true;
            }
            handle_search_key(ke, app)
        }
        CEvent::Mouse(m) => handle_mouse_event(m, app),
        _ => false,
    }
}
