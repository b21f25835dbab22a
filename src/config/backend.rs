//! Catalog backend configuration

use crate::backend::{catalog_or_demo, CatalogEntry};
use serde::Deserialize;

/// Catalog backend settings
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    /// Artificial delay added to every backend call (ms)
    pub latency_ms: u64,
    /// Entries served by the catalog; empty means the built-in demo catalog
    pub catalog: Vec<CatalogEntry>,
}

/// Backend settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileBackend {
    pub latency_ms: Option<u64>,
    pub catalog: Option<Vec<CatalogEntry>>,
}

impl BackendConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileBackend>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            latency_ms: file.latency_ms.unwrap_or(0),
            catalog: file.catalog.unwrap_or_default(),
        }
    }

    /// Entries the backend should serve
    pub fn entries(&self) -> Vec<CatalogEntry> {
        catalog_or_demo(&self.catalog)
    }
}
