use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::logic::DropdownView;
use crate::state::{AppState, Sex};
use crate::theme::{Theme, theme};
use crate::ui::cell_rect;

/// Notice shown when the dropdown is open but nothing matches.
pub const NO_MATCHES_TEXT: &str = "No matching suggestions";

/// What: Draw the dropdown under the search box while it is open.
///
/// Inputs:
/// - `area`: Space between the input and the footer
///
/// Output:
/// - Records the list, visible rows or the notice in `app.rects`, and the
///   number of visible rows in `app.dropdown_rows`.
///
/// Details:
/// - The list is sized to its content and never taller than `area`.
/// - `app.dropdown_scroll` is clamped so the window never runs past the end.
pub(super) fn render_dropdown(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let content_rows = match app.autocomplete.view() {
        DropdownView::Hidden => return,
        DropdownView::NoMatches => 1,
        DropdownView::Suggestions(items) => items.len(),
    };
    let wanted = u16::try_from(content_rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let rect = Rect {
        height: wanted.min(area.height),
        ..area
    };
    if rect.height < 3 || rect.width < 3 {
        tracing::trace!(height = area.height, "no room for dropdown");
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay1))
        .style(Style::default().bg(th.base));
    let inner = block.inner(rect);
    f.render_widget(Clear, rect);
    f.render_widget(block, rect);
    app.rects.suggestions_list = Some(cell_rect(rect));

    let visible = usize::from(inner.height);
    app.dropdown_rows = visible;
    match app.autocomplete.view() {
        DropdownView::NoMatches => {
            let row = Rect { height: 1, ..inner };
            f.render_widget(
                Paragraph::new(Span::styled(
                    NO_MATCHES_TEXT,
                    Style::default().fg(th.red).add_modifier(Modifier::ITALIC),
                )),
                row,
            );
            app.rects.no_suggestions = Some(cell_rect(row));
        }
        DropdownView::Suggestions(items) => {
            let start = app.dropdown_scroll.min(items.len().saturating_sub(visible));
            let mut rows = Vec::with_capacity(visible);
            for (offset, (index, record)) in
                items.iter().enumerate().skip(start).take(visible).enumerate()
            {
                let y = inner
                    .y
                    .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
                let row = Rect { y, height: 1, ..inner };
                f.render_widget(Paragraph::new(suggestion_line(&th, record)), row);
                rows.push((index, cell_rect(row)));
            }
            app.dropdown_scroll = start;
            app.rects.suggestion_items = rows;
        }
        DropdownView::Hidden => {}
    }
}

/// What: Style one suggestion row.
///
/// Details:
/// - Male names use the link color; every other record uses the danger color.
fn suggestion_line<'a>(th: &Theme, record: &'a crate::state::Record) -> Line<'a> {
    let name_color = if record.sex == Sex::Male {
        th.sapphire
    } else {
        th.red
    };
    Line::from(vec![
        Span::styled(record.name.as_str(), Style::default().fg(name_color)),
        Span::styled(
            format!("  {}", record.lifespan()),
            Style::default().fg(th.overlay1),
        ),
    ])
}
