//! Interaction controller
//!
//! Sans-IO state machine tying the query session and focus tracker to user
//! input. The host translates terminal events into [`Input`]s, feeds them to
//! [`Controller::handle`], and executes the returned [`Effect`]s (see
//! `driver`). Backend completions come back in as inputs too, so every state
//! change happens on the event loop that owns the controller.
//!
//! ```text
//! keystroke ──▶ Edit ──▶ session.set_query ──▶ Effect::Query
//! Down/Up   ──▶ Next/Previous ──▶ focus.move_*
//! Enter     ──▶ Submit ──▶ commit(focused)  ──▶ Effect::Dispatch + Effect::Query("")
//! click     ──▶ Click(i) ──▶ commit(i)
//! focus in  ──▶ WindowFocused ──▶ reset     ──▶ Effect::Query("")
//! focus out ──▶ WindowBlurred               ──▶ Effect::NotifyBlur
//! ```

use super::focus::FocusTracker;
use super::item::{Form, ResultItem};
use super::render::{self, RenderedItem};
use super::session::{Applied, QuerySession, QueryTicket};
use crate::backend::BackendError;
use std::fmt;

/// Text-changing edits of the input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    /// Delete the last word (and any whitespace after it)
    DeleteWord,
    Clear,
}

impl TextEdit {
    /// Apply the edit to `text`, returning the new text
    fn apply(self, text: &str) -> String {
        let mut out = text.to_string();
        match self {
            TextEdit::Insert(c) => out.push(c),
            TextEdit::Backspace => {
                out.pop();
            }
            TextEdit::DeleteWord => {
                let trimmed = out.trim_end().len();
                out.truncate(trimmed);
                let cut = out
                    .char_indices()
                    .rev()
                    .find(|(_, c)| c.is_whitespace())
                    .map(|(i, c)| i + c.len_utf8())
                    .unwrap_or(0);
                out.truncate(cut);
            }
            TextEdit::Clear => out.clear(),
        }
        out
    }
}

/// Everything the controller reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Edit(TextEdit),
    /// Commit the focused item (Enter)
    Submit,
    Next,
    Previous,
    /// Pointer click on the item at this list index
    Click(usize),
    WindowFocused,
    WindowBlurred,
    QueryCompleted {
        seq: u64,
        result: Result<Vec<ResultItem>, BackendError>,
    },
    DispatchCompleted {
        result: Result<(), BackendError>,
    },
}

/// Work the host must carry out on the controller's behalf
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Query(QueryTicket),
    Dispatch(Form),
    NotifyBlur,
    Notify(Notice),
}

/// Non-fatal condition to surface to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    QueryFailed(BackendError),
    DispatchFailed(BackendError),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::QueryFailed(e) => write!(f, "✗ Query failed: {}", e),
            Notice::DispatchFailed(e) => write!(f, "✗ Action failed: {}", e),
        }
    }
}

pub struct Controller {
    session: QuerySession,
    focus: FocusTracker,
    input_focused: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::with_max_results(0)
    }

    /// Controller whose result lists are capped at `max_results` (0 = unlimited)
    pub fn with_max_results(max_results: usize) -> Self {
        Self {
            session: QuerySession::new().with_limit(max_results),
            focus: FocusTracker::new(),
            input_focused: true,
        }
    }

    /// Initial default listing for a freshly opened window
    pub fn start(&mut self) -> Vec<Effect> {
        vec![Effect::Query(self.session.reset())]
    }

    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::Edit(edit) => self.edit(edit),
            Input::Submit => match self.focus.focused() {
                Some(idx) => self.commit(idx),
                None => Vec::new(),
            },
            Input::Next => {
                self.focus.move_next();
                Vec::new()
            }
            Input::Previous => {
                self.focus.move_previous();
                Vec::new()
            }
            Input::Click(idx) => self.commit(idx),
            Input::WindowFocused => {
                tracing::debug!("Window focused, resetting session");
                self.input_focused = true;
                self.invalidate_list();
                vec![Effect::Query(self.session.reset())]
            }
            Input::WindowBlurred => {
                self.input_focused = false;
                vec![Effect::NotifyBlur]
            }
            Input::QueryCompleted { seq, result } => self.apply_results(seq, result),
            Input::DispatchCompleted { result } => match result {
                Ok(()) => Vec::new(),
                Err(e) => {
                    // Query state was reset optimistically; nothing to roll back
                    tracing::error!("Dispatch failed: {}", e);
                    vec![Effect::Notify(Notice::DispatchFailed(e))]
                }
            },
        }
    }

    fn edit(&mut self, edit: TextEdit) -> Vec<Effect> {
        let text = edit.apply(self.session.query());
        if text == self.session.query() {
            return Vec::new();
        }
        // The visible list stays until the new one lands, but nothing in it
        // may be committed
        self.focus.set_focus(None);
        vec![Effect::Query(self.session.set_query(text))]
    }

    fn commit(&mut self, idx: usize) -> Vec<Effect> {
        // Rows on screen belong to a superseded query (or a previous commit)
        if self.session.is_pending() {
            tracing::debug!("Ignoring commit of #{} while a query is outstanding", idx);
            return Vec::new();
        }
        let Some(item) = self.session.results().get(idx) else {
            return Vec::new();
        };

        tracing::info!("Committing {:?}", item.title);
        let form = item.on_click.clone();
        self.invalidate_list();
        vec![Effect::Dispatch(form), Effect::Query(self.session.reset())]
    }

    fn apply_results(
        &mut self,
        seq: u64,
        result: Result<Vec<ResultItem>, BackendError>,
    ) -> Vec<Effect> {
        match self.session.apply(seq, result) {
            Applied::Stale => Vec::new(),
            Applied::Results(len) => {
                self.focus.reset(len);
                Vec::new()
            }
            Applied::Failed(e) => {
                tracing::warn!("Query failed: {}", e);
                self.focus.reset(0);
                vec![Effect::Notify(Notice::QueryFailed(e))]
            }
        }
    }

    /// Focus never outlives the list it points into
    fn invalidate_list(&mut self) {
        self.focus.clear();
        self.session.clear_results();
    }

    pub fn query(&self) -> &str {
        self.session.query()
    }

    pub fn results(&self) -> &[ResultItem] {
        self.session.results()
    }

    pub fn focused(&self) -> Option<usize> {
        self.focus.focused()
    }

    pub fn focused_item(&self) -> Option<&ResultItem> {
        self.focus.focused().and_then(|i| self.session.results().get(i))
    }

    pub fn rendered(&self) -> Vec<RenderedItem> {
        render::render(self.session.results(), self.focus.focused())
    }

    pub fn focus_tracker(&self) -> &FocusTracker {
        &self.focus
    }

    /// Mutable access for viewport sizing by the renderer
    pub fn focus_tracker_mut(&mut self) -> &mut FocusTracker {
        &mut self.focus
    }

    pub fn is_pending(&self) -> bool {
        self.session.is_pending()
    }

    pub fn error(&self) -> Option<&BackendError> {
        self.session.error()
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(titles: &[&str]) -> Vec<ResultItem> {
        titles
            .iter()
            .map(|t| ResultItem::new(*t, json!({ "run": t })))
            .collect()
    }

    fn tickets(effects: &[Effect]) -> Vec<QueryTicket> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Query(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    fn dispatches(effects: &[Effect]) -> Vec<Form> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Dispatch(f) => Some(f.clone()),
                _ => None,
            })
            .collect()
    }

    /// Complete the single query in `effects` with `titles`
    fn complete(c: &mut Controller, effects: &[Effect], titles: &[&str]) -> Vec<Effect> {
        let ticket = tickets(effects).pop().expect("a query effect");
        c.handle(Input::QueryCompleted {
            seq: ticket.seq,
            result: Ok(items(titles)),
        })
    }

    /// Controller showing `[A, B, C]` for the empty query
    fn started() -> Controller {
        let mut c = Controller::new();
        let effects = c.start();
        complete(&mut c, &effects, &["A", "B", "C"]);
        c
    }

    #[test]
    fn test_start_issues_empty_query() {
        let mut c = Controller::new();
        let effects = c.start();
        assert_eq!(tickets(&effects)[0].text, "");
    }

    #[test]
    fn test_render_focuses_first_item() {
        let c = started();
        assert_eq!(c.focused(), Some(0));
        let rows = c.rendered();
        assert_eq!(rows.iter().filter(|r| r.focused).count(), 1);
        assert!(rows[0].focused);
    }

    #[test]
    fn test_navigate_wrap_and_commit_scenario() {
        let mut c = started();

        c.handle(Input::Next);
        c.handle(Input::Next);
        assert_eq!(c.focused_item().unwrap().title, "C");

        c.handle(Input::Next);
        assert_eq!(c.focused_item().unwrap().title, "A");

        let effects = c.handle(Input::Submit);
        assert_eq!(dispatches(&effects), vec![Form::new(json!({"run": "A"}))]);
        let requeried = tickets(&effects);
        assert_eq!(requeried.len(), 1);
        assert_eq!(requeried[0].text, "");
        assert_eq!(c.query(), "");
        assert_eq!(c.focused(), None);
    }

    #[test]
    fn test_submit_without_focus_is_noop() {
        let mut c = Controller::new();
        let effects = c.start();
        complete(&mut c, &effects, &[]);

        assert_eq!(c.focused(), None);
        assert!(c.handle(Input::Submit).is_empty());
    }

    #[test]
    fn test_click_dispatches_clicked_item_only() {
        let mut c = started();

        let effects = c.handle(Input::Click(1));
        assert_eq!(dispatches(&effects), vec![Form::new(json!({"run": "B"}))]);
    }

    #[test]
    fn test_double_activation_dispatches_once() {
        let mut c = started();

        let first = c.handle(Input::Submit);
        assert_eq!(dispatches(&first).len(), 1);

        // Enter-then-click before the reset listing arrives
        assert!(c.handle(Input::Click(0)).is_empty());
        assert!(c.handle(Input::Submit).is_empty());

        // Once the new list is rendered, commits work again
        complete(&mut c, &first, &["A", "B"]);
        let again = c.handle(Input::Click(1));
        assert_eq!(dispatches(&again).len(), 1);
    }

    #[test]
    fn test_commit_before_new_list_arrives_is_ignored() {
        let mut c = started();
        let e = c.handle(Input::Edit(TextEdit::Insert('l')));
        assert_eq!(c.focused(), None);

        // Old rows stay visible but cannot be run
        assert_eq!(c.results().len(), 3);
        assert!(c.handle(Input::Submit).is_empty());
        assert!(c.handle(Input::Click(0)).is_empty());
        c.handle(Input::Next);
        assert!(dispatches(&c.handle(Input::Submit)).is_empty());

        complete(&mut c, &e, &["Lock screen"]);
        let effects = c.handle(Input::Submit);
        assert_eq!(dispatches(&effects), vec![Form::new(json!({"run": "Lock screen"}))]);
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut c = started();
        assert!(c.handle(Input::Click(7)).is_empty());
    }

    #[test]
    fn test_typing_issues_query_per_change() {
        let mut c = started();

        let e1 = c.handle(Input::Edit(TextEdit::Insert('o')));
        let e2 = c.handle(Input::Edit(TextEdit::Insert('p')));
        assert_eq!(tickets(&e1)[0].text, "o");
        assert_eq!(tickets(&e2)[0].text, "op");

        let e3 = c.handle(Input::Edit(TextEdit::Backspace));
        assert_eq!(tickets(&e3)[0].text, "o");
    }

    #[test]
    fn test_non_changing_edit_issues_no_query() {
        let mut c = started();
        assert!(c.handle(Input::Edit(TextEdit::Backspace)).is_empty());
        assert!(c.handle(Input::Edit(TextEdit::Clear)).is_empty());
    }

    #[test]
    fn test_stale_response_does_not_overwrite() {
        let mut c = started();
        let q1 = tickets(&c.handle(Input::Edit(TextEdit::Insert('a'))))[0].clone();
        let q2 = tickets(&c.handle(Input::Edit(TextEdit::Insert('b'))))[0].clone();

        c.handle(Input::QueryCompleted {
            seq: q2.seq,
            result: Ok(items(&["ab"])),
        });
        c.handle(Input::QueryCompleted {
            seq: q1.seq,
            result: Ok(items(&["a1", "a2"])),
        });

        assert_eq!(c.results(), items(&["ab"]).as_slice());
        assert_eq!(c.focused(), Some(0));
    }

    #[test]
    fn test_query_failure_empties_list_and_notifies() {
        let mut c = started();
        let e = c.handle(Input::Edit(TextEdit::Insert('x')));
        let ticket = tickets(&e)[0].clone();

        let effects = c.handle(Input::QueryCompleted {
            seq: ticket.seq,
            result: Err(BackendError::Unavailable("socket closed".into())),
        });

        assert!(matches!(
            effects.as_slice(),
            [Effect::Notify(Notice::QueryFailed(_))]
        ));
        assert!(c.results().is_empty());
        assert_eq!(c.focused(), None);
        assert!(c.error().is_some());

        // Subsequent queries still work
        let e = c.handle(Input::Edit(TextEdit::Backspace));
        complete(&mut c, &e, &["A"]);
        assert_eq!(c.focused(), Some(0));
        assert!(c.error().is_none());
    }

    #[test]
    fn test_dispatch_failure_notifies_without_rollback() {
        let mut c = started();
        let e = c.handle(Input::Edit(TextEdit::Insert('b')));
        complete(&mut c, &e, &["B"]);
        assert_eq!(dispatches(&c.handle(Input::Submit)).len(), 1);

        let effects = c.handle(Input::DispatchCompleted {
            result: Err(BackendError::Rejected("no such action".into())),
        });
        assert!(matches!(
            effects.as_slice(),
            [Effect::Notify(Notice::DispatchFailed(_))]
        ));
        assert_eq!(c.query(), "");
    }

    #[test]
    fn test_blur_then_focus_resets_session() {
        let mut c = started();
        c.handle(Input::Edit(TextEdit::Insert('q')));
        c.handle(Input::Next);

        assert_eq!(c.handle(Input::WindowBlurred), vec![Effect::NotifyBlur]);
        assert!(!c.input_focused());

        let effects = c.handle(Input::WindowFocused);
        let ticket = &tickets(&effects)[0];
        assert_eq!(ticket.text, "");
        assert_eq!(c.query(), "");
        assert!(c.input_focused());

        complete(&mut c, &effects, &["X", "Y"]);
        assert_eq!(c.focused_item().unwrap().title, "X");
    }

    #[test]
    fn test_delete_word() {
        assert_eq!(TextEdit::DeleteWord.apply("open term"), "open ");
        assert_eq!(TextEdit::DeleteWord.apply("open term  "), "open ");
        assert_eq!(TextEdit::DeleteWord.apply("open"), "");
        assert_eq!(TextEdit::DeleteWord.apply(""), "");
    }
}
