//! Core value types used by peoplefind state.

use serde::{Deserialize, Serialize};

/// Categorical attribute of a [`Record`], only used to pick a display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Encoded as `"m"` in data files.
    #[serde(rename = "m")]
    Male,
    /// Encoded as `"f"` in data files.
    #[serde(rename = "f")]
    Female,
}

/// One selectable person from the static source list.
///
/// Records are immutable once loaded; the search core only filters them and
/// never reorders or mutates the base list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique, stable identifier (e.g. `"carolus-haverbeke-1832"`).
    pub slug: String,
    /// Display name; the only field the matcher looks at.
    pub name: String,
    /// Used for styling the suggestion row.
    pub sex: Sex,
    /// Year of birth.
    pub born: i32,
    /// Year of death.
    pub died: i32,
    /// Father's display name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    /// Mother's display name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
}

impl Record {
    /// What: Render the birth/death span used next to a name.
    ///
    /// Output:
    /// - `"born - died"`, e.g. `"1832 - 1905"`.
    #[must_use]
    pub fn lifespan(&self) -> String {
        format!("{} - {}", self.born, self.died)
    }

    /// What: Render the page title for a selected person.
    ///
    /// Output:
    /// - `"Name (born - died)"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.lifespan())
    }
}

/// Which widget currently owns keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Search input has focus; typed characters edit the query.
    Search,
    /// Nothing focused (initial state).
    #[default]
    None,
}

/// Stable identifiers for the rendered roles that automated UI tests look up.
///
/// Exactly one identifier per role; suggestion rows share the
/// [`TestHook::SuggestionItem`] identifier and are told apart by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TestHook {
    /// Page title showing the selected person.
    Title,
    /// Root search box.
    SearchInput,
    /// Suggestions container.
    SuggestionsList,
    /// One suggestion row.
    SuggestionItem,
    /// "No matching suggestions" notice.
    NoSuggestionsMessage,
}

impl TestHook {
    /// What: Return the stable string identifier for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::SearchInput => "search-input",
            Self::SuggestionsList => "suggestions-list",
            Self::SuggestionItem => "suggestion-item",
            Self::NoSuggestionsMessage => "no-suggestions-message",
        }
    }
}

/// Rectangle in terminal cells as `(x, y, width, height)`.
pub type CellRect = (u16, u16, u16, u16);

/// What: Test whether a terminal cell lies inside a rectangle.
///
/// Inputs:
/// - `rect`: `(x, y, width, height)`
/// - `column`, `row`: Cell coordinates
///
/// Output:
/// - `true` when the cell is inside (right/bottom edges exclusive).
#[must_use]
pub fn rect_contains(rect: CellRect, column: u16, row: u16) -> bool {
    let (x, y, w, h) = rect;
    column >= x
        && row >= y
        && u32::from(column) < u32::from(x) + u32::from(w)
        && u32::from(row) < u32::from(y) + u32::from(h)
}

/// Result of hit-testing a rendered frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    /// Role under the pointer.
    pub hook: TestHook,
    /// Index into the visible suggestions for [`TestHook::SuggestionItem`].
    pub index: Option<usize>,
}

/// Rectangles recorded during the last render, keyed by role.
///
/// Refreshed on every frame so mouse handling and UI tests always see the
/// layout the user is looking at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedRects {
    /// Title row.
    pub title: Option<CellRect>,
    /// Search input box, borders included.
    pub search_input: Option<CellRect>,
    /// Dropdown container while open.
    pub suggestions_list: Option<CellRect>,
    /// Visible suggestion rows as `(suggestion_index, rect)`.
    pub suggestion_items: Vec<(usize, CellRect)>,
    /// Empty-result notice while open.
    pub no_suggestions: Option<CellRect>,
}

impl RenderedRects {
    /// What: Look up the rectangle rendered for a role.
    ///
    /// Output:
    /// - First matching rectangle; for suggestion rows, the first visible row.
    #[must_use]
    pub fn find(&self, hook: TestHook) -> Option<CellRect> {
        match hook {
            TestHook::Title => self.title,
            TestHook::SearchInput => self.search_input,
            TestHook::SuggestionsList => self.suggestions_list,
            TestHook::SuggestionItem => self.suggestion_items.first().map(|(_, r)| *r),
            TestHook::NoSuggestionsMessage => self.no_suggestions,
        }
    }

    /// What: Resolve which role (if any) occupies a terminal cell.
    ///
    /// Inputs:
    /// - `column`, `row`: Cell coordinates of a pointer event
    ///
    /// Output:
    /// - The innermost role at that cell, or `None` outside every recorded rect.
    ///
    /// Details:
    /// - Rows and the notice are checked before their container so a click on a
    ///   row reports the row rather than the list.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        if let Some((index, _)) = self
            .suggestion_items
            .iter()
            .find(|(_, r)| rect_contains(*r, column, row))
        {
            return Some(Hit {
                hook: TestHook::SuggestionItem,
                index: Some(*index),
            });
        }
        let singles = [
            (TestHook::NoSuggestionsMessage, self.no_suggestions),
            (TestHook::SuggestionsList, self.suggestions_list),
            (TestHook::SearchInput, self.search_input),
            (TestHook::Title, self.title),
        ];
        singles.into_iter().find_map(|(hook, rect)| {
            rect.filter(|r| rect_contains(*r, column, row))
                .map(|_| Hit { hook, index: None })
        })
    }

    /// What: Forget every recorded rectangle before a new frame is laid out.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
