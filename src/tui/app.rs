// TUI application state
//
// Owns the launcher controller plus the bits only the terminal host needs:
// theme, toast, where the result list was last drawn, and the quit flag.
// Terminal events go in, controller effects come out; the event loop hands
// those effects to the driver.

use super::components::Toast;
use super::keys::{self, HostAction};
use super::theme::Theme;
use crate::config::Config;
use crate::launcher::{Controller, Effect, Input};
use crate::logging::LogBuffer;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Main application state for the TUI
pub struct App {
    pub controller: Controller,
    pub theme: Theme,
    pub log_buffer: LogBuffer,

    /// Shown in the search bar title
    pub backend_name: String,

    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Inner area of the result list from the last draw
    pub list_area: Rect,

    pub should_quit: bool,

    animation_frame: usize,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, backend_name: impl Into<String>) -> Self {
        Self {
            controller: Controller::with_max_results(config.max_results),
            theme: Theme::by_name(&config.theme),
            log_buffer,
            backend_name: backend_name.into(),
            toast: None,
            list_area: Rect::default(),
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// Translate a terminal event and feed it to the controller
    pub fn handle_event(&mut self, event: Event) -> Vec<Effect> {
        let input = match event {
            Event::Key(key) => match keys::translate_key(key) {
                Some(HostAction::Quit) => {
                    self.should_quit = true;
                    None
                }
                Some(HostAction::Launcher(input)) => Some(input),
                None => None,
            },
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            Event::FocusGained => Some(Input::WindowFocused),
            Event::FocusLost => Some(Input::WindowBlurred),
            _ => None,
        };

        match input {
            Some(input) => self.controller.handle(input),
            None => Vec::new(),
        }
    }

    /// Apply a completion from the driver
    pub fn handle_completion(&mut self, input: Input) -> Vec<Effect> {
        self.controller.handle(input)
    }

    /// Show effects the driver handed back as toasts
    pub fn surface(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            if let Effect::Notify(notice) = effect {
                self.toast = Some(Toast::from(notice));
            }
        }
    }

    fn translate_mouse(&self, mouse: MouseEvent) -> Option<Input> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let pos = Position::new(mouse.column, mouse.row);
                if !self.list_area.contains(pos) {
                    return None;
                }
                let row = (mouse.row - self.list_area.y) as usize;
                self.controller
                    .focus_tracker()
                    .index_at_row(row)
                    .map(Input::Click)
            }
            kind => keys::translate_scroll(kind),
        }
    }

    /// Advance spinner and expire toasts
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::launcher::{Form, Notice, ResultItem};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::json;

    fn app_with_results(titles: &[&str]) -> App {
        let mut app = App::new(&Config::default(), LogBuffer::new(), "catalog");
        let effects = app.controller.start();
        let Some(Effect::Query(ticket)) = effects.first() else {
            panic!("start should issue a query");
        };
        let items = titles
            .iter()
            .map(|t| ResultItem::new(*t, json!({ "open": t })))
            .collect();
        app.handle_completion(Input::QueryCompleted {
            seq: ticket.seq,
            result: Ok(items),
        });
        app.list_area = Rect::new(1, 4, 30, 5);
        app.controller.focus_tracker_mut().set_viewport(5);
        app
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_typing_issues_query() {
        let mut app = app_with_results(&[]);
        let effects = app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('f'),
            KeyModifiers::NONE,
        )));
        assert!(matches!(effects.as_slice(), [Effect::Query(t)] if t.text == "f"));
    }

    #[test]
    fn test_click_inside_list_dispatches_row() {
        let mut app = app_with_results(&["one", "two", "three"]);
        let effects = app.handle_event(click(5, 5));
        assert_eq!(
            effects.first(),
            Some(&Effect::Dispatch(Form::new(json!({ "open": "two" }))))
        );
    }

    #[test]
    fn test_click_outside_list_ignored() {
        let mut app = app_with_results(&["one", "two"]);
        assert!(app.handle_event(click(5, 1)).is_empty());
        // Row exists in the area but has no item
        assert!(app.handle_event(click(5, 8)).is_empty());
    }

    #[test]
    fn test_focus_events_reach_controller() {
        let mut app = app_with_results(&["one"]);
        assert_eq!(app.handle_event(Event::FocusLost), vec![Effect::NotifyBlur]);
        assert!(!app.controller.input_focused());

        let effects = app.handle_event(Event::FocusGained);
        assert!(matches!(effects.as_slice(), [Effect::Query(_)]));
        assert!(app.controller.input_focused());
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app_with_results(&[]);
        let effects = app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Esc,
            KeyModifiers::NONE,
        )));
        assert!(effects.is_empty());
        assert!(app.should_quit);
    }

    #[test]
    fn test_notice_surfaces_as_toast() {
        let mut app = app_with_results(&[]);
        app.surface(vec![Effect::Notify(Notice::QueryFailed(BackendError::Timeout))]);
        assert!(app
            .toast
            .as_ref()
            .is_some_and(|t| t.message.starts_with("✗ Query failed")));

        // Fresh toasts survive a tick
        app.tick();
        assert!(app.toast.is_some());
    }
}
