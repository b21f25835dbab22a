// Search bar component
//
// Single-line input with a prompt glyph. The terminal cursor is placed after
// the query while the launcher window has focus.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "› ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let query = app.controller.query();

    let title = format!(" {} ", app.backend_name);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);

    // Keep the tail of long queries visible
    let room = (inner.width as usize).saturating_sub(PROMPT.width() + 1);
    let shown = tail_to_width(query, room);

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(theme.prompt)),
        Span::styled(shown, Style::default().fg(theme.foreground)),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);

    if app.controller.input_focused() && inner.height > 0 {
        let x = inner.x + (PROMPT.width() + shown.width()) as u16;
        f.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn tail_to_width(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut start = text.len();
    let mut used = 0;
    for (idx, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
