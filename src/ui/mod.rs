//! TUI rendering for peoplefind.
//!
//! `ui` lays out the page (title, search box, dropdown, key hints), draws
//! it, and records every rectangle it drew into [`AppState::rects`] so mouse
//! handling and tests see exactly what is on screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::state::types::CellRect;
use crate::theme::theme;

mod dropdown;
mod footer;
mod search;
mod title;

pub use dropdown::NO_MATCHES_TEXT;

/// Widest the search column grows on large terminals.
const MAX_COLUMN_WIDTH: u16 = 72;

/// What: Convert a ratatui rectangle into the cell tuple stored in `AppState`.
pub(crate) const fn cell_rect(r: Rect) -> CellRect {
    (r.x, r.y, r.width, r.height)
}

/// What: Render one frame of the page and refresh hit-test rectangles.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Mutable state (rects, scroll window and controller region are updated)
///
/// Output:
/// - Draws to `f`; returns nothing.
///
/// Details:
/// - The dropdown is drawn last, directly under the input, over whatever
///   space remains above the footer.
/// - The controller's region is set to the input plus the dropdown so a click
///   on either counts as inside the component.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    app.rects.clear();

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.show_hints);
    let column = Rect {
        x: area.x.saturating_add(1).min(area.right()),
        width: area.width.saturating_sub(2).min(MAX_COLUMN_WIDTH),
        ..area
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(footer_h),
        ])
        .split(column);

    title::render_title(f, app, chunks[0]);
    search::render_search(f, app, chunks[1]);
    if app.show_hints {
        footer::render_footer(f, chunks[3]);
    }
    dropdown::render_dropdown(f, app, chunks[2]);

    let mut region = Vec::with_capacity(2);
    region.extend(app.rects.search_input);
    region.extend(app.rects.suggestions_list);
    app.autocomplete.set_region(&region);
}

#[cfg(test)]
mod tests;
