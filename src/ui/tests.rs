use ratatui::{Terminal, backend::TestBackend};

use super::ui;
use crate::state::{AppState, TestHook};
use crate::test_utils::{advance, new_app};

/// What: Render one frame into an in-memory backend and return its text rows.
fn render(app: &mut AppState, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut term = Terminal::new(backend).expect("test terminal");
    term.draw(|f| ui(f, app)).expect("draw frame");
    let buf = term.backend().buffer().clone();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

#[test]
/// What: A fresh page shows title, placeholder and hints but no dropdown.
///
/// Inputs:
/// - New state rendered at 60x12.
///
/// Output:
/// - Title and input rects recorded; no list rect; placeholder text on screen.
fn initial_frame_has_title_and_placeholder() {
    let (mut app, _sched, _rx) = new_app();
    let rows = render(&mut app, 60, 12);
    assert!(app.rects.find(TestHook::Title).is_some());
    assert!(app.rects.find(TestHook::SearchInput).is_some());
    assert!(app.rects.find(TestHook::SuggestionsList).is_none());
    assert!(rows[0].contains("No selected person"));
    assert!(rows.iter().any(|r| r.contains("Enter a part of the name")));
    assert!(rows.iter().any(|r| r.contains("Ctrl+C")));
}

#[test]
/// What: Focusing a blank box lists every record, one row each.
///
/// Inputs:
/// - `focus_search` then render.
///
/// Output:
/// - Two suggestion rows recorded under the input, both names visible.
fn focused_blank_query_lists_everyone() {
    let (mut app, _sched, _rx) = new_app();
    app.focus_search();
    let rows = render(&mut app, 60, 12);
    assert_eq!(app.rects.suggestion_items.len(), 2);
    let list = app.rects.find(TestHook::SuggestionsList).expect("list rect");
    let input = app.rects.find(TestHook::SearchInput).expect("input rect");
    assert_eq!(list.1, input.1 + input.3);
    assert!(rows.iter().any(|r| r.contains("John")));
    assert!(rows.iter().any(|r| r.contains("Joan")));
}

#[test]
/// What: An open dropdown with no matches shows the notice.
///
/// Inputs:
/// - Query `"zzz"` after the debounce elapses.
///
/// Output:
/// - Notice rect recorded, no rows, notice text on screen.
fn no_matches_notice() {
    let (mut app, sched, _rx) = new_app();
    app.focus_search();
    app.edit_query("zzz".to_string());
    assert_eq!(advance(&mut app, &sched, 300), 1);
    let rows = render(&mut app, 60, 12);
    assert!(app.rects.find(TestHook::NoSuggestionsMessage).is_some());
    assert!(app.rects.suggestion_items.is_empty());
    assert!(rows.iter().any(|r| r.contains("No matching suggestions")));
}

#[test]
/// What: The controller's region covers the input and the open list.
fn region_follows_render() {
    let (mut app, _sched, _rx) = new_app();
    app.focus_search();
    render(&mut app, 60, 12);
    let list = app.rects.suggestions_list.expect("list rect");
    assert_eq!(
        app.autocomplete.handle_pointer_down(list.0 + 1, list.1 + 1),
        crate::logic::PointerOutcome::Inside
    );
    assert_eq!(
        app.autocomplete.handle_pointer_down(list.0 + 1, 11),
        crate::logic::PointerOutcome::Outside
    );
}

#[test]
/// What: A short terminal shows a scrolled window of suggestions.
///
/// Inputs:
/// - Footer hidden, 7 rows total so the list has one visible row; scroll by one.
///
/// Output:
/// - Only the second record's row is recorded.
fn scrolled_window() {
    let (mut app, _sched, _rx) = new_app();
    app.show_hints = false;
    app.focus_search();
    render(&mut app, 40, 8);
    assert_eq!(app.dropdown_rows, 1);
    app.scroll_dropdown(1);
    render(&mut app, 40, 8);
    assert_eq!(app.rects.suggestion_items.len(), 1);
    assert_eq!(app.rects.suggestion_items[0].0, 1);
}
