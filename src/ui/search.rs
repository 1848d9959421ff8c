use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::ui::cell_rect;

/// What: Draw the bordered search input and place the cursor when focused.
///
/// Inputs:
/// - `area`: Three-row slot for the box
///
/// Details:
/// - The placeholder appears whenever the query is empty, focused or not.
/// - The cursor sits after the last character, clamped to the inner width.
pub(super) fn render_search(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let border = if focused { th.lavender } else { th.surface2 };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            " Search ",
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ));
    let inner = block.inner(area);

    let query = app.autocomplete.query();
    let line = if query.is_empty() {
        Line::from(Span::styled(
            app.placeholder.as_str(),
            Style::default()
                .fg(th.subtext0)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(query, Style::default().fg(th.text)))
    };
    let cursor_x = u16::try_from(query.width()).unwrap_or(u16::MAX);

    f.render_widget(Paragraph::new(line).block(block), area);
    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner
            .x
            .saturating_add(cursor_x.min(inner.width.saturating_sub(1)));
        f.set_cursor_position(Position::new(x, inner.y));
    }
    if area.height > 0 && area.width > 0 {
        app.rects.search_input = Some(cell_rect(area));
    }
}
