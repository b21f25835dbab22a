// Key and mouse translation
//
// Maps raw crossterm events onto launcher inputs. Kept free of App state so
// bindings can be tested without a terminal.
//
// | Key                  | Action                 |
// |----------------------|------------------------|
// | printable char       | insert into query      |
// | Backspace            | delete last char       |
// | Ctrl+U / Ctrl+W      | clear / delete word    |
// | Enter                | commit focused result  |
// | Down / Ctrl+N        | next result            |
// | Up / Ctrl+P          | previous result        |
// | Esc / Ctrl+C         | quit                   |

use crate::launcher::{Input, TextEdit};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// What the host should do with a terminal event
#[derive(Debug, Clone, PartialEq)]
pub enum HostAction {
    Launcher(Input),
    Quit,
}

/// Translate a key event, ignoring releases
pub fn translate_key(key: KeyEvent) -> Option<HostAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = match key.code {
        KeyCode::Esc => return Some(HostAction::Quit),
        KeyCode::Char('c') if ctrl => return Some(HostAction::Quit),
        KeyCode::Char('n') if ctrl => Input::Next,
        KeyCode::Char('p') if ctrl => Input::Previous,
        KeyCode::Char('u') if ctrl => Input::Edit(TextEdit::Clear),
        KeyCode::Char('w') if ctrl => Input::Edit(TextEdit::DeleteWord),
        // Other chords are not text
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => Input::Edit(TextEdit::Insert(c)),
        KeyCode::Backspace => Input::Edit(TextEdit::Backspace),
        KeyCode::Enter => Input::Submit,
        KeyCode::Down => Input::Next,
        KeyCode::Up => Input::Previous,
        _ => return None,
    };
    Some(HostAction::Launcher(input))
}

/// Translate wheel scrolling into focus movement
pub fn translate_scroll(kind: MouseEventKind) -> Option<Input> {
    match kind {
        MouseEventKind::ScrollDown => Some(Input::Next),
        MouseEventKind::ScrollUp => Some(Input::Previous),
        _ => None,
    }
}
