// Theme support for the TUI
//
// Named palettes selected via config. "default" uses the terminal's ANSI
// palette, the others use true color (RGB).

use ratatui::style::Color;

/// Color palette for the launcher
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color,
    pub title: Color,

    /// Prompt glyph and cursor in the search bar
    pub prompt: Color,
    /// Focused result row
    pub selection: Color,
    pub selection_fg: Color,
    /// Non-focused result rows
    pub result: Color,
    /// Hints and counts in the status line
    pub muted: Color,
    pub error: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::terminal(), // "default" or unknown
        }
    }

    /// Uses the terminal's ANSI palette
    pub fn terminal() -> Self {
        Self {
            name: "default".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            title: Color::Cyan,
            prompt: Color::Cyan,
            selection: Color::Blue,
            selection_fg: Color::White,
            result: Color::Gray,
            muted: Color::DarkGray,
            error: Color::Red,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            border: Color::Rgb(0x62, 0x72, 0xa4),       // comment
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),    // yellow
            title: Color::Rgb(0x8b, 0xe9, 0xfd),        // cyan
            prompt: Color::Rgb(0xbd, 0x93, 0xf9),       // purple
            selection: Color::Rgb(0x44, 0x47, 0x5a),    // current line
            selection_fg: Color::Rgb(0xf8, 0xf8, 0xf2),
            result: Color::Rgb(0xf8, 0xf8, 0xf2),
            muted: Color::Rgb(0x62, 0x72, 0xa4),
            error: Color::Rgb(0xff, 0x55, 0x55),        // red
        }
    }

    /// Nord theme - https://www.nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
            title: Color::Rgb(0x88, 0xc0, 0xd0),
            prompt: Color::Rgb(0x81, 0xa1, 0xc1),
            selection: Color::Rgb(0x43, 0x4c, 0x5e),
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4),
            result: Color::Rgb(0xd8, 0xde, 0xe9),
            muted: Color::Rgb(0x61, 0x6e, 0x88),
            error: Color::Rgb(0xbf, 0x61, 0x6a),
        }
    }

    /// Gruvbox dark - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            border: Color::Rgb(0x66, 0x5c, 0x54),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            title: Color::Rgb(0x83, 0xa5, 0x98),
            prompt: Color::Rgb(0xfe, 0x80, 0x19),
            selection: Color::Rgb(0x50, 0x49, 0x45),
            selection_fg: Color::Rgb(0xfb, 0xf1, 0xc7),
            result: Color::Rgb(0xeb, 0xdb, 0xb2),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            error: Color::Rgb(0xfb, 0x49, 0x34),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::terminal()
    }
}
