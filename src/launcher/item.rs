//! Result items as delivered by the backend
//!
//! A query round trip yields an ordered `Vec<ResultItem>`. Each item carries a
//! display title and an opaque action [`Form`] that only the backend
//! understands. The launcher forwards forms verbatim and never looks inside.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque action payload attached to a result item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Form(serde_json::Value);

impl Form {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the raw payload (for transport and logging only)
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Form {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One candidate action in a result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    #[serde(rename = "onClick")]
    pub on_click: Form,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, on_click: impl Into<Form>) -> Self {
        Self {
            title: title.into(),
            on_click: on_click.into(),
        }
    }
}
