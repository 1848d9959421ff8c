use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::handle_search_key;
use crate::logic::DropdownView;
use crate::state::Focus;
use crate::test_utils::{advance, new_app};

/// What: Build a plain key press without modifiers.
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// What: Build a key press with `Ctrl` held.
fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

#[test]
/// What: Typing while unfocused focuses the box, then edits and opens the dropdown.
///
/// Inputs:
/// - `'J'`, `'o'` typed on a fresh state.
///
/// Output:
/// - Focus on search, query `"Jo"`, dropdown open, one pending timer, two clears sent.
fn typing_focuses_and_edits() {
    let (mut app, sched, mut rx) = new_app();
    handle_search_key(key(KeyCode::Char('J')), &mut app);
    handle_search_key(key(KeyCode::Char('o')), &mut app);
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(app.autocomplete.query(), "Jo");
    assert!(app.autocomplete.is_open());
    assert_eq!(sched.clock().pending_count(), 1);
    assert_eq!(rx.try_recv().ok(), Some(None));
    assert_eq!(rx.try_recv().ok(), Some(None));
    assert!(rx.try_recv().is_err());
}

#[test]
/// What: Tab on a blank box shows every record immediately; Tab again blurs.
///
/// Inputs:
/// - `Tab`, then `Tab`.
///
/// Output:
/// - All records listed without a timer; second Tab leaves the dropdown open but unfocused.
fn tab_focus_shows_everything_without_debounce() {
    let (mut app, sched, _rx) = new_app();
    handle_search_key(key(KeyCode::Tab), &mut app);
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(
        app.autocomplete.suggestions(),
        app.autocomplete.records()
    );
    assert_eq!(sched.clock().scheduled_count(), 0);

    handle_search_key(key(KeyCode::Tab), &mut app);
    assert_eq!(app.focus, Focus::None);
    assert!(app.autocomplete.is_open());
}

#[test]
/// What: Backspace on an empty box is not an edit.
///
/// Inputs:
/// - Focus via Tab, then Backspace.
///
/// Output:
/// - No timer scheduled and no selection clear sent.
fn backspace_on_empty_is_noop() {
    let (mut app, sched, mut rx) = new_app();
    handle_search_key(key(KeyCode::Tab), &mut app);
    handle_search_key(key(KeyCode::Backspace), &mut app);
    assert_eq!(sched.clock().scheduled_count(), 0);
    assert!(rx.try_recv().is_err());
}

#[test]
/// What: Backspace, Ctrl+W and Ctrl+U edit the query and restart the debounce.
///
/// Inputs:
/// - Type `"Jan Fr"`, then Backspace, Ctrl+W, and Ctrl+U on `"Jan "`.
///
/// Output:
/// - Query steps `"Jan F"` -> `"Jan "` -> `""`; one timer pending throughout.
fn deletion_keys_edit() {
    let (mut app, sched, _rx) = new_app();
    for ch in "Jan Fr".chars() {
        handle_search_key(key(KeyCode::Char(ch)), &mut app);
    }
    handle_search_key(key(KeyCode::Backspace), &mut app);
    assert_eq!(app.autocomplete.query(), "Jan F");
    handle_search_key(ctrl('w'), &mut app);
    assert_eq!(app.autocomplete.query(), "Jan ");
    handle_search_key(ctrl('u'), &mut app);
    assert_eq!(app.autocomplete.query(), "");
    assert_eq!(sched.clock().pending_count(), 1);

    assert_eq!(advance(&mut app, &sched, 300), 1);
    assert_eq!(
        app.autocomplete.view(),
        DropdownView::Suggestions(app.autocomplete.records())
    );
}

#[test]
/// What: Esc drops focus but keeps the dropdown as it was.
fn escape_blurs_only() {
    let (mut app, _sched, _rx) = new_app();
    handle_search_key(key(KeyCode::Char('x')), &mut app);
    handle_search_key(key(KeyCode::Esc), &mut app);
    assert_eq!(app.focus, Focus::None);
    assert!(app.autocomplete.is_open());
    assert_eq!(app.autocomplete.query(), "x");
}

#[test]
/// What: Deletion keys refocus a blurred box before editing.
///
/// Inputs:
/// - Type `"xy"`, blur with Esc, then Backspace; blur again, then Ctrl+U.
///
/// Output:
/// - Each deletion focuses the box and edits; a third timer is scheduled.
fn deletion_refocuses_after_blur() {
    let (mut app, sched, _rx) = new_app();
    handle_search_key(key(KeyCode::Char('x')), &mut app);
    handle_search_key(key(KeyCode::Char('y')), &mut app);
    handle_search_key(key(KeyCode::Esc), &mut app);
    handle_search_key(key(KeyCode::Backspace), &mut app);
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(app.autocomplete.query(), "x");
    assert_eq!(sched.clock().scheduled_count(), 3);

    handle_search_key(key(KeyCode::Esc), &mut app);
    handle_search_key(ctrl('u'), &mut app);
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(app.autocomplete.query(), "");
    assert_eq!(sched.clock().scheduled_count(), 4);
}
