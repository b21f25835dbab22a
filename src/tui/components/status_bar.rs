// Status bar component
//
// One line at the bottom: spinner while a query is outstanding, result
// count, the most recent problem from the log buffer, and key hints.

use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str = "↑↓ move  ⏎ run  esc quit ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let controller = &app.controller;

    let mut spans = Vec::new();
    if controller.is_pending() {
        spans.push(Span::styled(
            format!(" {} ", app.spinner_char()),
            Style::default().fg(theme.highlight),
        ));
    } else {
        spans.push(Span::raw(" "));
    }

    let count = controller.results().len();
    spans.push(Span::styled(
        format!("{} result{}", count, if count == 1 { "" } else { "s" }),
        Style::default().fg(theme.muted),
    ));

    if let Some(err) = controller.error() {
        spans.push(Span::styled(
            format!(" │ {}", err),
            Style::default().fg(theme.error),
        ));
    } else if let Some(entry) = app.log_buffer.latest_problem() {
        spans.push(Span::styled(
            format!(" │ {}", entry.summary()),
            Style::default().fg(theme.error),
        ));
    }

    let hints_width = HINTS.chars().count() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints_width)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    f.render_widget(
        Paragraph::new(HINTS).style(Style::default().fg(theme.muted)),
        chunks[1],
    );
}
