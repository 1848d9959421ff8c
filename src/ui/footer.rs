use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::theme;

/// Key hints as `(keys, action)` pairs.
const HINTS: [(&str, &str); 5] = [
    ("Tab", "focus"),
    ("Esc", "blur"),
    ("click", "select"),
    ("Ctrl+U", "clear"),
    ("Ctrl+C", "quit"),
];

/// What: Draw a one-line footer listing the key bindings.
pub(super) fn render_footer(f: &mut Frame, area: Rect) {
    let th = theme();
    let mut spans = Vec::with_capacity(HINTS.len() * 3);
    for (i, (keys, action)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().fg(th.overlay1)));
        }
        spans.push(Span::styled(*keys, Style::default().fg(th.sapphire)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(th.subtext0),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
