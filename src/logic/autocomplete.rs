//! Autocomplete controller: debounce, filtering, selection and outside-click
//! dismissal for one search box.
//!
//! The controller is a plain state machine. The host feeds it focus, edit,
//! timer and pointer events in arrival order and reads back what to render.
//!
//! | State           | Dropdown | Timer            |
//! |-----------------|----------|------------------|
//! | Idle/Closed     | hidden   | maybe pending    |
//! | Open/Searching  | visible  | pending          |
//! | Open/Settled    | visible  | none             |

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::logic::listener::{ListenerGuard, ListenerId, PointerHub};
use crate::logic::matcher::{is_blank, match_records};
use crate::logic::timer::{Scheduler, TimerId};
use crate::state::Record;
use crate::state::types::{CellRect, rect_contains};

/// Debounce delay used when the caller does not configure one.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Callback invoked with the newly selected record, or `None` when the
/// selection is cleared by an edit.
pub type SelectionCallback = Box<dyn FnMut(Option<&Record>) + Send>;

/// What the dropdown should show right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownView<'a> {
    /// Dropdown closed; render nothing.
    Hidden,
    /// Dropdown open with at least one suggestion.
    Suggestions(&'a [Record]),
    /// Dropdown open and the last match produced nothing.
    NoMatches,
}

/// Outcome of offering a pointer-down event to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Pointer landed on the component; nothing changed.
    Inside,
    /// Pointer landed elsewhere; the dropdown is now closed.
    Outside,
    /// Controller is not mounted and does not listen for pointers.
    Ignored,
}

/// Search box controller owning query text, debounce timer, suggestions,
/// dropdown visibility and the outside-click listener.
pub struct Autocomplete {
    /// Fixed base list, in caller order.
    records: Arc<[Record]>,
    /// Time between the last edit and recomputing suggestions.
    delay: Duration,
    /// Host notification for selection changes.
    on_selected: SelectionCallback,
    /// Source of debounce timers.
    scheduler: Box<dyn Scheduler>,
    /// Raw user input.
    query: String,
    /// The one in-flight debounce timer, if any.
    pending: Option<TimerId>,
    /// Matcher output at the last timer firing (or focus on a blank query).
    suggestions: Vec<Record>,
    /// Dropdown visibility.
    open: bool,
    /// Last explicitly chosen record, cleared by the next edit.
    selected: Option<Record>,
    /// Outside-click registration while mounted.
    listener: Option<ListenerGuard>,
    /// Screen area covered by the component on the last render.
    region: Vec<CellRect>,
}

impl fmt::Debug for Autocomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("records", &self.records.len())
            .field("delay", &self.delay)
            .field("query", &self.query)
            .field("pending", &self.pending)
            .field("suggestions", &self.suggestions.len())
            .field("open", &self.open)
            .field("selected", &self.selected.as_ref().map(|r| &r.slug))
            .field("mounted", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Autocomplete {
    /// What: Build a closed controller over a fixed record list.
    ///
    /// Inputs:
    /// - `records`: Base list, already sorted by the caller
    /// - `delay`: Debounce delay (see [`DEFAULT_DELAY`])
    /// - `scheduler`: Timer source; owned exclusively by this controller
    /// - `on_selected`: Called synchronously on every selection change
    ///
    /// Output:
    /// - Controller in the Idle/Closed state with empty query and no suggestions.
    pub fn new(
        records: impl Into<Arc<[Record]>>,
        delay: Duration,
        scheduler: Box<dyn Scheduler>,
        on_selected: impl FnMut(Option<&Record>) + Send + 'static,
    ) -> Self {
        Self {
            records: records.into(),
            delay,
            on_selected: Box::new(on_selected),
            scheduler,
            query: String::new(),
            pending: None,
            suggestions: Vec::new(),
            open: false,
            selected: None,
            listener: None,
            region: Vec::new(),
        }
    }

    /// What: Start listening for pointer-down events on the host.
    ///
    /// Details:
    /// - Calling again while mounted keeps the existing registration.
    pub fn mount(&mut self, hub: &PointerHub) {
        if self.listener.is_none() {
            self.listener = Some(hub.subscribe());
            tracing::debug!("autocomplete mounted");
        }
    }

    /// What: Tear down: cancel the pending timer and drop the pointer listener.
    ///
    /// Details:
    /// - Idempotent; safe on a never-mounted or already torn down controller.
    /// - Timer ids delivered after teardown are ignored by `handle_timer_fired`.
    pub fn unmount(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
            tracing::trace!(%id, "pending debounce cancelled on teardown");
        }
        if let Some(mut guard) = self.listener.take() {
            guard.release();
            tracing::debug!("autocomplete unmounted");
        }
    }

    /// Whether the outside-click listener is registered.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Id under which the outside-click listener is registered, while mounted.
    #[must_use]
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.listener.as_ref().map(ListenerGuard::id)
    }

    /// What: Handle the search box gaining focus.
    ///
    /// Details:
    /// - Opens the dropdown.
    /// - With a blank query the full list is shown immediately, bypassing the
    ///   debounce; otherwise the current suggestions stay as they are.
    pub fn handle_focus(&mut self) {
        self.open = true;
        if is_blank(&self.query) {
            self.suggestions = self.records.to_vec();
        }
        tracing::trace!(query = %self.query, "focus");
    }

    /// What: Handle a keystroke that changed the query text.
    ///
    /// Inputs:
    /// - `text`: Full new query text
    ///
    /// Details:
    /// - Updates the query and opens the dropdown synchronously.
    /// - Clears the selection and notifies the host with `None` right away.
    /// - Cancels the previous timer before scheduling the new one, so at most
    ///   one timer is ever pending.
    pub fn handle_edit(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.open = true;
        self.selected = None;
        (self.on_selected)(None);
        if let Some(old) = self.pending.take() {
            self.scheduler.cancel(old);
        }
        let id = self.scheduler.schedule(self.delay);
        self.pending = Some(id);
        tracing::trace!(query = %self.query, %id, "edit; debounce scheduled");
    }

    /// What: Handle a timer elapsing.
    ///
    /// Inputs:
    /// - `id`: Timer delivered by the host
    ///
    /// Output:
    /// - `true` when suggestions were recomputed; `false` for stale or unknown ids.
    ///
    /// Details:
    /// - Replaces suggestions wholesale with the matcher output for the query
    ///   as it is now. Visibility and selection are untouched, so a firing
    ///   while closed only refreshes the list in the background.
    pub fn handle_timer_fired(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            tracing::trace!(%id, "ignoring stale debounce timer");
            return false;
        }
        self.pending = None;
        self.suggestions = match_records(&self.query, &self.records)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(
            query = %self.query,
            matches = self.suggestions.len(),
            "suggestions updated"
        );
        true
    }

    /// What: Select the suggestion at `index`.
    ///
    /// Output:
    /// - The chosen record, or `None` when closed or out of range (no change).
    ///
    /// Details:
    /// - Sets the query to the record name, closes the dropdown and notifies
    ///   the host synchronously. A pending timer keeps running.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&Record> {
        if !self.open {
            return None;
        }
        let record = self.suggestions.get(index)?.clone();
        self.query.clone_from(&record.name);
        self.open = false;
        (self.on_selected)(Some(&record));
        tracing::debug!(slug = %record.slug, "suggestion selected");
        self.selected = Some(record);
        self.selected.as_ref()
    }

    /// What: Offer a pointer-down event at a terminal cell.
    ///
    /// Output:
    /// - [`PointerOutcome::Outside`] closes the dropdown and changes nothing else.
    /// - [`PointerOutcome::Ignored`] when unmounted or when the hub no longer
    ///   holds the registration (removed by the host or dropped).
    pub fn handle_pointer_down(&mut self, column: u16, row: u16) -> PointerOutcome {
        if !self.listener.as_ref().is_some_and(ListenerGuard::is_registered) {
            return PointerOutcome::Ignored;
        }
        if self
            .region
            .iter()
            .any(|r| rect_contains(*r, column, row))
        {
            return PointerOutcome::Inside;
        }
        if self.open {
            tracing::trace!(column, row, "outside click closes dropdown");
        }
        self.open = false;
        PointerOutcome::Outside
    }

    /// What: Record the screen area the component occupied on the last render.
    pub fn set_region(&mut self, rects: &[CellRect]) {
        self.region.clear();
        self.region.extend_from_slice(rects);
    }

    /// What: Describe what the dropdown should display.
    #[must_use]
    pub fn view(&self) -> DropdownView<'_> {
        if !self.open {
            DropdownView::Hidden
        } else if self.suggestions.is_empty() {
            DropdownView::NoMatches
        } else {
            DropdownView::Suggestions(&self.suggestions)
        }
    }

    /// Current raw query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last computed suggestions.
    #[must_use]
    pub fn suggestions(&self) -> &[Record] {
        &self.suggestions
    }

    /// Whether the dropdown is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Last explicitly selected record, if not cleared by an edit since.
    #[must_use]
    pub const fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    /// Whether a debounce timer is in flight.
    #[must_use]
    pub const fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the in-flight debounce timer.
    #[must_use]
    pub const fn pending_timer(&self) -> Option<TimerId> {
        self.pending
    }

    /// Configured debounce delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Base record list.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Drop for Autocomplete {
    fn drop(&mut self) {
        self.unmount();
    }
}
