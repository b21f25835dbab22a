//! Query session
//!
//! Owns the live query text and the result list it produced. Every query
//! change hands out a [`QueryTicket`] carrying a monotonically increasing
//! sequence number; completions are applied only if they belong to the most
//! recently issued ticket. Superseded requests are never cancelled, they are
//! simply discarded when they arrive.

use super::item::ResultItem;
use crate::backend::BackendError;

/// A query request the host must send to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub seq: u64,
    pub text: String,
}

/// What happened when a completion was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Results replaced the list; carries the new length
    Results(usize),
    /// The backend call failed; the list was emptied
    Failed(BackendError),
    /// A newer query was issued since this one; nothing changed
    Stale,
}

#[derive(Debug, Default)]
pub struct QuerySession {
    query: String,
    results: Vec<ResultItem>,
    latest_seq: u64,
    pending: bool,
    error: Option<BackendError>,
    /// Keep at most this many items from each response
    limit: Option<usize>,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap every applied result list at `limit` items (0 = unlimited)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// True while the latest ticket has not completed
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Error from the latest applied query, if it failed
    pub fn error(&self) -> Option<&BackendError> {
        self.error.as_ref()
    }

    /// Change the query text and issue exactly one new request
    pub fn set_query(&mut self, text: impl Into<String>) -> QueryTicket {
        self.query = text.into();
        self.latest_seq += 1;
        self.pending = true;
        tracing::trace!("Issuing query #{} {:?}", self.latest_seq, self.query);
        QueryTicket {
            seq: self.latest_seq,
            text: self.query.clone(),
        }
    }

    /// Back to the empty query (default listing)
    pub fn reset(&mut self) -> QueryTicket {
        self.set_query(String::new())
    }

    /// Drop the displayed list without issuing a query
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Apply a backend completion for ticket `seq`
    pub fn apply(&mut self, seq: u64, result: Result<Vec<ResultItem>, BackendError>) -> Applied {
        if seq != self.latest_seq {
            tracing::debug!(
                "Discarding stale query response #{} (latest #{})",
                seq,
                self.latest_seq
            );
            return Applied::Stale;
        }

        self.pending = false;
        match result {
            Ok(mut items) => {
                if let Some(limit) = self.limit {
                    items.truncate(limit);
                }
                self.error = None;
                self.results = items;
                Applied::Results(self.results.len())
            }
            Err(e) => {
                // Never leave the previous list on screen after a failure
                self.results.clear();
                self.error = Some(e.clone());
                Applied::Failed(e)
            }
        }
    }
}
