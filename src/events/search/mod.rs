use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::events::utils::without_last_word;
use crate::state::{AppState, Focus};

#[cfg(test)]
mod tests;

/// What: Handle a key press aimed at the search box.
///
/// Inputs:
/// - `ke`: Key event (press only; filtered by the caller)
/// - `app`: Mutable application state
///
/// Output:
/// - Always `false`; quitting is handled globally.
///
/// Details:
/// - `Tab` toggles focus (gaining focus runs the controller's focus transition);
///   `Esc` drops focus without closing the dropdown.
/// - Every editing key (printable characters, `Backspace`, `Ctrl+U`, `Ctrl+W`)
///   focuses the box if needed.
/// - Deletion keys then edit only when they actually change the text,
///   mirroring a browser input that fires no change event otherwise.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    let alt = ke.modifiers.contains(KeyModifiers::ALT);
    match ke.code {
        KeyCode::Tab | KeyCode::BackTab => {
            if app.focus == Focus::Search {
                app.focus = Focus::None;
            } else {
                app.focus_search();
            }
        }
        KeyCode::Esc => {
            app.focus = Focus::None;
        }
        KeyCode::Char('u') if ctrl => replace_query(app, String::new()),
        KeyCode::Char('w') if ctrl => {
            let next = without_last_word(app.autocomplete.query());
            replace_query(app, next);
        }
        KeyCode::Char(ch) if !ctrl && !alt => {
            if app.focus != Focus::Search {
                app.focus_search();
            }
            let mut next = app.autocomplete.query().to_string();
            next.push(ch);
            app.edit_query(next);
        }
        KeyCode::Backspace => {
            let mut next = app.autocomplete.query().to_string();
            next.pop();
            replace_query(app, next);
        }
        _ => {}
    }
    false
}

/// What: Focus the box if needed, then apply an edit when the text really changed.
fn replace_query(app: &mut AppState, next: String) {
    if app.focus != Focus::Search {
        app.focus_search();
    }
    if next != app.autocomplete.query() {
        app.edit_query(next);
    }
}
