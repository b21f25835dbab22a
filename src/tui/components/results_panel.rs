// Results panel component
//
// Draws the visible window of the result list. The panel reports its inner
// height back to the focus tracker so keyboard movement scrolls minimally,
// and records where rows landed so mouse clicks can be mapped to items.

use crate::launcher::render::truncate_to_width;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.clone();

    let len = app.controller.results().len();
    let title = match app.controller.focused() {
        Some(idx) => format!(" Results ({}/{}) ", idx + 1, len),
        None => format!(" Results ({}) ", len),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(title, Style::default().fg(theme.title)));

    let inner = block.inner(area);
    app.list_area = inner;
    app.controller
        .focus_tracker_mut()
        .set_viewport(inner.height as usize);

    if len == 0 {
        let message = if app.controller.is_pending() {
            format!("{} Searching…", app.spinner_char())
        } else if app.controller.error().is_some() {
            "Query failed".to_string()
        } else {
            "No results".to_string()
        };
        let placeholder = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let range = app.controller.focus_tracker().visible_range();
    // One column for the marker
    let width = (inner.width as usize).saturating_sub(2);

    let rows: Vec<ListItem> = app.controller.rendered()[range]
        .iter()
        .map(|row| {
            let title = truncate_to_width(&row.title, width);
            if row.focused {
                ListItem::new(Line::from(vec![
                    Span::raw("▸ "),
                    Span::raw(title),
                ]))
                .style(
                    Style::default()
                        .bg(theme.selection)
                        .fg(theme.selection_fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(title, Style::default().fg(theme.result)),
                ]))
            }
        })
        .collect();

    f.render_widget(List::new(rows).block(block), area);
}
