//! Result renderer
//!
//! Pure mapping from the current result list and focus index to display rows.
//! Holds no state; the TUI results panel styles whatever this returns.

use super::item::ResultItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A single displayable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// Position in the result list (stable for the lifetime of the list)
    pub index: usize,
    pub title: String,
    pub focused: bool,
}

/// Map result items to rendered rows, marking at most one as focused
pub fn render(items: &[ResultItem], focus: Option<usize>) -> Vec<RenderedItem> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| RenderedItem {
            index,
            title: item.title.clone(),
            focused: focus == Some(index),
        })
        .collect()
}

/// Truncate a title to a display width, ending with an ellipsis when cut
///
/// Uses unicode display width (not byte length) so CJK and emoji titles
/// line up with the terminal columns.
pub fn truncate_to_width(title: &str, width: usize) -> String {
    if title.width() <= width {
        return title.to_string();
    }
    if width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis
    let target_width = width - 1;
    let mut current_width = 0;
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(titles: &[&str]) -> Vec<ResultItem> {
        titles
            .iter()
            .map(|t| ResultItem::new(*t, json!(t)))
            .collect()
    }

    #[test]
    fn test_render_marks_only_focused_row() {
        let rows = render(&items(&["a", "b", "c"]), Some(1));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows.iter().filter(|r| r.focused).count(), 1);
        assert!(rows[1].focused);
        assert_eq!(rows[2].index, 2);
    }

    #[test]
    fn test_render_without_focus() {
        let rows = render(&items(&["a", "b"]), None);
        assert!(rows.iter().all(|r| !r.focused));
    }

    #[test]
    fn test_render_empty_list() {
        assert!(render(&[], Some(0)).is_empty());
    }

    #[test]
    fn test_truncate_respects_display_width() {
        assert_eq!(truncate_to_width("launcher", 20), "launcher");
        assert_eq!(truncate_to_width("launcher", 5), "laun…");
        // Each CJK char is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
