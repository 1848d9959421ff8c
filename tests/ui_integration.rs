//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests drive the page the way a user would (events in, frames out)
//! and read the screen back through the recorded hook rectangles.

use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;

use peoplefind::events::handle_event;
use peoplefind::logic::{DEFAULT_DELAY, ManualScheduler};
use peoplefind::sources::builtin_records;
use peoplefind::state::{AppState, Record, TestHook};
use peoplefind::ui::ui;

struct Page {
    app: AppState,
    sched: ManualScheduler,
    rx: mpsc::UnboundedReceiver<Option<Record>>,
    term: Terminal<TestBackend>,
}

impl Page {
    fn new() -> Self {
        let sched = ManualScheduler::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let app = AppState::new(
            builtin_records(),
            DEFAULT_DELAY,
            Box::new(sched.clone()),
            tx,
        );
        let term = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
        let mut page = Self {
            app,
            sched,
            rx,
            term,
        };
        page.draw();
        page
    }

    fn draw(&mut self) {
        let app = &mut self.app;
        self.term.draw(|f| ui(f, app)).expect("draw frame");
    }

    fn send(&mut self, ev: CEvent) {
        assert!(!handle_event(ev, &mut self.app));
        self.app.drain_selection(&mut self.rx);
        self.draw();
    }

    fn type_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.send(CEvent::Key(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::empty(),
            )));
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        self.send(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }));
    }

    fn click_hook(&mut self, hook: TestHook) {
        let (x, y, _, h) = self.app.rects.find(hook).expect("hook rendered");
        self.click(x + 1, y + h / 2);
    }

    fn wait(&mut self, ms: u64) {
        for id in self.sched.advance(std::time::Duration::from_millis(ms)) {
            self.app.autocomplete.handle_timer_fired(id);
        }
        self.draw();
    }

    fn screen(&self) -> String {
        let buf = self.term.backend().buffer();
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn row_text(&self, hook: TestHook) -> String {
        let (x, y, w, _) = self.app.rects.find(hook).expect("hook rendered");
        let buf = self.term.backend().buffer();
        (x..x + w).map(|cx| buf[(cx, y)].symbol()).collect()
    }
}

#[test]
fn initial_page_has_title_and_input_only() {
    let page = Page::new();
    assert_eq!(page.row_text(TestHook::Title).trim(), "No selected person");
    assert!(page.app.rects.find(TestHook::SearchInput).is_some());
    assert!(page.app.rects.find(TestHook::SuggestionsList).is_none());
    assert!(page.screen().contains("Enter a part of the name"));
}

#[test]
fn click_input_then_type_then_select() {
    let mut page = Page::new();
    page.click_hook(TestHook::SearchInput);
    assert!(page.app.rects.find(TestHook::SuggestionsList).is_some());
    assert!(page.app.rects.find(TestHook::SuggestionItem).is_some());

    page.type_str("emma");
    page.wait(300);
    let first = page.row_text(TestHook::SuggestionItem);
    assert!(first.contains("Emma de Milliano"), "row was {first:?}");

    page.click_hook(TestHook::SuggestionItem);
    assert!(page.app.rects.find(TestHook::SuggestionsList).is_none());
    assert_eq!(
        page.row_text(TestHook::Title).trim(),
        "Emma de Milliano (1876 - 1956)"
    );
    assert!(page.screen().contains("Emma de Milliano"));
}

#[test]
fn no_matches_notice_and_outside_click() {
    let mut page = Page::new();
    page.type_str("qqqq");
    page.wait(300);
    assert!(
        page.row_text(TestHook::NoSuggestionsMessage)
            .contains("No matching suggestions")
    );
    page.click(70, 0);
    assert!(page.app.rects.find(TestHook::NoSuggestionsMessage).is_none());
    assert!(page.screen().contains("qqqq"));
}

#[test]
fn editing_after_selection_clears_title() {
    let mut page = Page::new();
    page.click_hook(TestHook::SearchInput);
    page.click_hook(TestHook::SuggestionItem);
    assert_ne!(page.row_text(TestHook::Title).trim(), "No selected person");
    page.click_hook(TestHook::SearchInput);
    page.send(CEvent::Key(KeyEvent::new(
        KeyCode::Backspace,
        KeyModifiers::empty(),
    )));
    assert_eq!(page.row_text(TestHook::Title).trim(), "No selected person");
}
