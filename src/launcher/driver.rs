//! Effect driver
//!
//! Executes controller effects against the backend without blocking the event
//! loop. Each backend call runs in its own tokio task; query and dispatch
//! completions are sent back over an mpsc channel as [`Input`]s so the event
//! loop applies them in arrival order. Superseded queries are not cancelled.

use super::controller::{Effect, Input};
use crate::backend::{Backend, BackendError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub struct Driver {
    backend: Arc<dyn Backend>,
    completions: mpsc::Sender<Input>,
    query_timeout: Duration,
}

impl Driver {
    pub fn new(
        backend: Arc<dyn Backend>,
        completions: mpsc::Sender<Input>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            completions,
            query_timeout,
        }
    }

    /// Run every backend-bound effect; returns the ones left for the host
    pub fn execute_all(&self, effects: Vec<Effect>) -> Vec<Effect> {
        effects
            .into_iter()
            .filter_map(|effect| self.execute(effect))
            .collect()
    }

    /// Start the backend call for an effect
    ///
    /// `Notify` is not a backend call and is handed back unchanged.
    pub fn execute(&self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::Query(ticket) => {
                let call = self.backend.query(ticket.text);
                let tx = self.completions.clone();
                let timeout = self.query_timeout;
                tokio::spawn(async move {
                    let result = match tokio::time::timeout(timeout, call).await {
                        Ok(result) => result,
                        Err(_) => Err(BackendError::Timeout),
                    };
                    // Receiver gone means the launcher is shutting down
                    let _ = tx
                        .send(Input::QueryCompleted {
                            seq: ticket.seq,
                            result,
                        })
                        .await;
                });
                None
            }
            Effect::Dispatch(form) => {
                let call = self.backend.dispatch(form);
                let tx = self.completions.clone();
                tokio::spawn(async move {
                    let result = call.await;
                    let _ = tx.send(Input::DispatchCompleted { result }).await;
                });
                None
            }
            Effect::NotifyBlur => {
                let call = self.backend.notify_blur();
                tokio::spawn(async move {
                    if let Err(e) = call.await {
                        tracing::warn!("Blur notification failed: {}", e);
                    }
                });
                None
            }
            notify @ Effect::Notify(_) => Some(notify),
        }
    }
}
