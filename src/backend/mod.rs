//! Backend collaborator seam
//!
//! The launcher talks to whatever computes results and runs actions through
//! three message-style calls:
//!
//! - `query(text)` → ordered result items (idempotent, no backend side effects)
//! - `dispatch(form)` → perform the action behind an item
//! - `notify_blur()` → fire-and-forget "window lost focus" signal
//!
//! Calls return boxed futures so implementations can be held as
//! `Arc<dyn Backend>` and driven from spawned tokio tasks.

mod catalog;

pub use catalog::{catalog_or_demo, CatalogBackend, CatalogEntry};

use crate::launcher::{Form, ResultItem};
use futures::future::BoxFuture;
use std::fmt;

/// Errors a backend call can surface to the launcher
///
/// None of these are fatal: queries degrade to an empty list, dispatches to
/// "action not performed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The call did not complete within the configured timeout
    Timeout,
    /// The backend refused the request
    Rejected(String),
    /// The backend could not be reached or has gone away
    Unavailable(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "Backend timed out"),
            Self::Rejected(msg) => write!(f, "Backend rejected request: {}", msg),
            Self::Unavailable(msg) => write!(f, "Backend unavailable: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

/// The external collaborator that answers queries and executes actions
pub trait Backend: Send + Sync {
    /// Human-readable name for logging
    fn name(&self) -> &'static str;

    /// Compute the ordered result list for a query text
    fn query(&self, text: String) -> BoxFuture<'static, Result<Vec<ResultItem>, BackendError>>;

    /// Perform the action behind a result item
    ///
    /// Any value the action produces is not inspected by the launcher.
    fn dispatch(&self, form: Form) -> BoxFuture<'static, Result<(), BackendError>>;

    /// Inform the backend that the launcher window lost foreground focus
    fn notify_blur(&self) -> BoxFuture<'static, Result<(), BackendError>>;
}
