//! Focus tracker
//!
//! Owns the single focused result as an index into the current list, plus the
//! scroll window used to keep that result visible. Focus identity is an index,
//! not a rendering handle, so it can be exercised without a terminal.
//!
//! States: `Unfocused` (`focused == None`) and `FocusedOn(i)`.
//! - `reset(len)` after a render → `FocusedOn(0)` or `Unfocused`
//! - `move_next` / `move_previous` wrap around; no-ops on an empty list
//! - `clear()` on commit → `Unfocused` with an empty list

use std::ops::Range;

#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    focused: Option<usize>,
    len: usize,
    /// Index of the first visible row
    offset: usize,
    /// Number of rows the display can show (0 = unknown, treat as unbounded)
    viewport: usize,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// A new list was rendered: focus its first item (or nothing)
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.offset = 0;
        self.focused = if len > 0 { Some(0) } else { None };
    }

    /// The list was invalidated (commit): drop focus and length
    pub fn clear(&mut self) {
        self.reset(0);
    }

    /// Focus an explicit item, or clear focus with `None`
    ///
    /// Indexes outside the current list clear focus rather than pointing
    /// past the end.
    pub fn set_focus(&mut self, index: Option<usize>) {
        self.focused = index.filter(|&i| i < self.len);
        self.scroll_into_view();
    }

    pub fn move_next(&mut self) {
        if self.len == 0 {
            return;
        }
        let next = match self.focused {
            Some(i) if i + 1 < self.len => i + 1,
            _ => 0,
        };
        self.set_focus(Some(next));
    }

    pub fn move_previous(&mut self) {
        if self.len == 0 {
            return;
        }
        let prev = match self.focused {
            Some(i) if i > 0 => i - 1,
            _ => self.len - 1,
        };
        self.set_focus(Some(prev));
    }

    /// Record how many rows are visible; keeps the focused row in view
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows;
        self.scroll_into_view();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Item indexes currently inside the scroll window
    pub fn visible_range(&self) -> Range<usize> {
        if self.viewport == 0 {
            return 0..self.len;
        }
        let end = (self.offset + self.viewport).min(self.len);
        self.offset.min(end)..end
    }

    /// Map a row inside the list area to the item shown there
    pub fn index_at_row(&self, row: usize) -> Option<usize> {
        let index = self.offset + row;
        self.visible_range().contains(&index).then_some(index)
    }

    /// Minimal scroll: only move the window when the focused row is outside it
    fn scroll_into_view(&mut self) {
        let Some(idx) = self.focused else {
            return;
        };
        if self.viewport == 0 {
            return;
        }
        if idx < self.offset {
            self.offset = idx;
        } else if idx >= self.offset + self.viewport {
            self.offset = idx + 1 - self.viewport;
        }
    }
}
