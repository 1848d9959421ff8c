use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::theme;
use crate::ui::cell_rect;

/// What: Draw the title row naming the selected person.
///
/// Inputs:
/// - `area`: Slot reserved for the title (first line is used)
///
/// Details:
/// - Shows `"Name (born - died)"` after a selection, otherwise the
///   no-selection placeholder in a muted color.
pub(super) fn render_title(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let row = Rect {
        height: area.height.min(1),
        ..area
    };
    let style = if app.selected.is_some() {
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.overlay1)
    };
    let line = Line::from(Span::styled(app.title_text(), style));
    f.render_widget(Paragraph::new(line), row);
    if row.height > 0 {
        app.rects.title = Some(cell_rect(row));
    }
}
