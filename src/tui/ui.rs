// UI rendering - assembles the launcher window
//
// ┌ catalog ─────────────────────┐
// │ › query                      │
// └──────────────────────────────┘
// ┌ Results (1/7) ───────────────┐
// │▸ Open terminal               │
// │  Open browser                │
// └──────────────────────────────┘
//  ◐ 7 results       ↑↓ move ...

use super::app::App;
use super::components::{results_panel, search_bar, status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Min(3),    // results
            Constraint::Length(1), // status line
        ])
        .split(area);

    search_bar::render(f, chunks[0], app);
    results_panel::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}
