//! In-process catalog backend
//!
//! Serves queries from a fixed list of `{ title, action }` entries loaded from
//! config (or the built-in demo catalog). Matching is a plain filter: an entry
//! matches when its title contains every whitespace-separated query word,
//! ignoring case. Catalog order is preserved; there is no scoring.
//!
//! Dispatch does not execute anything. It logs the form and records it so the
//! host (and tests) can see what was sent.

use super::{Backend, BackendError};
use crate::launcher::{Form, ResultItem};
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One catalog entry as written in the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub action: Form,
}

impl CatalogEntry {
    pub fn new(title: impl Into<String>, action: impl Into<Form>) -> Self {
        Self {
            title: title.into(),
            action: action.into(),
        }
    }

    fn matches(&self, words: &[String]) -> bool {
        let title = self.title.to_lowercase();
        words.iter().all(|w| title.contains(w.as_str()))
    }
}

/// Catalog shown when the config file defines no entries
pub fn demo_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Open terminal", json!(["open", "terminal"])),
        CatalogEntry::new("Open browser", json!(["open", "browser"])),
        CatalogEntry::new("Edit config", json!(["edit", "~/.config/vrsjmp/config.toml"])),
        CatalogEntry::new("Lock screen", json!(["system", "lock"])),
        CatalogEntry::new("Toggle do not disturb", json!(["system", "dnd", "toggle"])),
        CatalogEntry::new("Search notes", json!({"search": "notes"})),
        CatalogEntry::new("Calculator", json!(["open", "calc"])),
    ]
}

/// Configured entries, or the demo catalog when none are configured
pub fn catalog_or_demo(entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
    if entries.is_empty() {
        demo_catalog()
    } else {
        entries.to_vec()
    }
}

pub struct CatalogBackend {
    entries: Arc<Vec<CatalogEntry>>,
    latency: Duration,
    dispatches: Arc<AtomicUsize>,
    blurs: Arc<AtomicUsize>,
}

impl CatalogBackend {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
            latency: Duration::ZERO,
            dispatches: Arc::new(AtomicUsize::new(0)),
            blurs: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Delay every call by a fixed amount (simulates a remote backend)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of forms received through `dispatch`
    #[cfg(test)]
    pub fn dispatch_count(&self) -> usize {
        self.dispatches.load(Ordering::Relaxed)
    }

    /// Number of blur notifications received
    #[cfg(test)]
    pub fn blur_count(&self) -> usize {
        self.blurs.load(Ordering::Relaxed)
    }
}

fn filter(entries: &[CatalogEntry], text: &str) -> Vec<ResultItem> {
    let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
    entries
        .iter()
        .filter(|e| e.matches(&words))
        .map(|e| ResultItem::new(e.title.clone(), e.action.clone()))
        .collect()
}

impl Backend for CatalogBackend {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn query(&self, text: String) -> BoxFuture<'static, Result<Vec<ResultItem>, BackendError>> {
        let entries = self.entries.clone();
        let latency = self.latency;
        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            let items = filter(&entries, &text);
            tracing::debug!("Catalog query {:?} matched {} entries", text, items.len());
            Ok(items)
        }
        .boxed()
    }

    fn dispatch(&self, form: Form) -> BoxFuture<'static, Result<(), BackendError>> {
        let dispatches = self.dispatches.clone();
        let latency = self.latency;
        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            tracing::info!("Dispatched action {}", form);
            dispatches.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
        .boxed()
    }

    fn notify_blur(&self) -> BoxFuture<'static, Result<(), BackendError>> {
        let blurs = self.blurs.clone();
        async move {
            blurs.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Launcher window lost focus");
            Ok(())
        }
        .boxed()
    }
}
