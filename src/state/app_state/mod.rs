//! Central `AppState` container: the composition root of the TUI.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::logic::{Autocomplete, PointerHub, Scheduler};
use crate::state::types::{Focus, Record, RenderedRects};

/// Placeholder shown in the empty search box.
pub const DEFAULT_PLACEHOLDER: &str = "Enter a part of the name";

/// Title shown while nobody is selected.
pub const NO_SELECTION_TITLE: &str = "No selected person";

/// Global application state shared by the event and UI layers.
///
/// The page-level selection lives here and is only updated through the
/// controller's selection callback, which forwards over `selection_tx`; the
/// runtime drains the receiving side into [`AppState::apply_selection`].
#[derive(Debug)]
pub struct AppState {
    /// Search box controller.
    pub autocomplete: Autocomplete,
    /// Person shown in the title; `None` until something is picked.
    pub selected: Option<Record>,
    /// Which widget owns keyboard input.
    pub focus: Focus,
    /// Host registry for outside-click listeners.
    pub pointers: PointerHub,
    /// Rectangles from the last render for hit-testing.
    pub rects: RenderedRects,
    /// First suggestion index visible in the dropdown.
    pub dropdown_scroll: usize,
    /// Number of suggestion rows that fit on the last render.
    pub dropdown_rows: usize,
    /// Text shown in the empty search box.
    pub placeholder: String,
    /// Whether the key-hint footer is drawn.
    pub show_hints: bool,
}

impl AppState {
    /// What: Build the composition root around a fresh controller.
    ///
    /// Inputs:
    /// - `records`: Base list for the autocomplete
    /// - `delay`: Debounce delay
    /// - `scheduler`: Timer source handed to the controller
    /// - `selection_tx`: Receives every selection change emitted by the controller
    ///
    /// Output:
    /// - State with the controller mounted on this state's pointer hub.
    pub fn new(
        records: Vec<Record>,
        delay: Duration,
        scheduler: Box<dyn Scheduler>,
        selection_tx: mpsc::UnboundedSender<Option<Record>>,
    ) -> Self {
        let autocomplete = Autocomplete::new(records, delay, scheduler, move |r| {
            let _ = selection_tx.send(r.cloned());
        });
        let mut app = Self {
            autocomplete,
            selected: None,
            focus: Focus::None,
            pointers: PointerHub::new(),
            rects: RenderedRects::default(),
            dropdown_scroll: 0,
            dropdown_rows: 0,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            show_hints: true,
        };
        app.autocomplete.mount(&app.pointers);
        app
    }

    /// What: Store a selection change forwarded by the controller.
    pub fn apply_selection(&mut self, record: Option<Record>) {
        match &record {
            Some(r) => tracing::info!(slug = %r.slug, name = %r.name, "person selected"),
            None if self.selected.is_some() => tracing::debug!("selection cleared"),
            None => {}
        }
        self.selected = record;
    }

    /// What: Drain every pending selection message without waiting.
    ///
    /// Details:
    /// - Called right after input handling so the next frame already shows
    ///   the title for the latest selection.
    pub fn drain_selection(&mut self, rx: &mut mpsc::UnboundedReceiver<Option<Record>>) {
        while let Ok(record) = rx.try_recv() {
            self.apply_selection(record);
        }
    }

    /// What: Text for the title row.
    #[must_use]
    pub fn title_text(&self) -> String {
        self.selected
            .as_ref()
            .map_or_else(|| NO_SELECTION_TITLE.to_string(), Record::title)
    }

    /// What: Give the search box keyboard focus and run the controller's focus transition.
    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
        self.autocomplete.handle_focus();
        self.dropdown_scroll = 0;
    }

    /// What: Replace the query text, running the controller's edit transition.
    pub fn edit_query(&mut self, text: String) {
        self.autocomplete.handle_edit(text);
        self.dropdown_scroll = 0;
    }

    /// What: Scroll the dropdown window by `delta` rows, clamped to the list.
    pub fn scroll_dropdown(&mut self, delta: isize) {
        let len = self.autocomplete.suggestions().len();
        let max_start = len.saturating_sub(self.dropdown_rows.max(1));
        let next = self.dropdown_scroll.saturating_add_signed(delta);
        self.dropdown_scroll = next.min(max_start);
    }
}
