//! Mouse event handling for peoplefind's TUI.
//!
//! Left-button presses are offered to the controller's outside-click listener
//! before the rendered layout is hit-tested, matching the order in which a
//! document-level listener sees a click before the clicked element does.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic::PointerOutcome;
use crate::state::{AppState, Focus, Hit, TestHook};


/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and kind
/// - `app`: Mutable application state (rects, focus, controller)
///
/// Output:
/// - Always `false`; the mouse never requests exit.
///
/// Details:
/// - Left down: the pointer hub dispatches first and the controller hears the
///   click only while its listener is still registered; then the hit role decides.
///   A suggestion row selects; the input focuses; anything else blurs.
/// - Wheel over the open dropdown scrolls its visible window.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let delivered = app.pointers.dispatch(mx, my);
            let outcome = if app
                .autocomplete
                .listener_id()
                .is_some_and(|id| delivered.contains(&id))
            {
                app.autocomplete.handle_pointer_down(mx, my)
            } else {
                PointerOutcome::Ignored
            };
            tracing::trace!(mx, my, ?outcome, "left click");
            match app.rects.hit_test(mx, my) {
                Some(Hit {
                    hook: TestHook::SuggestionItem,
                    index: Some(i),
                }) => {
                    app.focus = Focus::None;
                    if app.autocomplete.select_suggestion(i).is_none() {
                        tracing::debug!(index = i, "click on stale suggestion row");
                    }
                }
                Some(Hit {
                    hook: TestHook::SearchInput,
                    ..
                }) => {
                    if app.focus != Focus::Search {
                        app.focus_search();
                    }
                }
                _ => app.focus = Focus::None,
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            let over_list = app
                .rects
                .suggestions_list
                .is_some_and(|r| crate::state::types::rect_contains(r, mx, my));
            if over_list {
                let delta = if matches!(m.kind, MouseEventKind::ScrollDown) {
                    1
                } else {
                    -1
                };
                app.scroll_dropdown(delta);
            }
        }
        _ => {}
    }
    false
}
