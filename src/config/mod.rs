//! Configuration for the launcher
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/vrsjmp/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod backend;
mod logging;
mod serialization;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use backend::{BackendConfig, FileBackend};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_THEME: &str = "default";
const DEFAULT_QUERY_TIMEOUT_MS: u64 = 2_000;
const DEFAULT_MAX_RESULTS: usize = 50;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "default", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// How long a query may take before it is treated as failed
    pub query_timeout_ms: u64,

    /// Maximum rows shown in the results list (0 = unlimited)
    pub max_results: usize,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Catalog backend settings
    pub backend: BackendConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            query_timeout_ms: DEFAULT_QUERY_TIMEOUT_MS,
            max_results: DEFAULT_MAX_RESULTS,
            logging: LoggingConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub query_timeout_ms: Option<u64>,
    pub max_results: Option<usize>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [backend] section
    pub backend: Option<FileBackend>,
}

impl FileConfig {
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid config TOML")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/vrsjmp/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("vrsjmp").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file means defaults. A file that exists but cannot be read
    /// or parsed is an error: a broken config should fail fast rather than
    /// silently fall back to defaults.
    fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => FileConfig::parse(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file config with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("VRSJMP_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Query timeout: env > file > default
        let query_timeout_ms = env("VRSJMP_QUERY_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .or(file.query_timeout_ms)
            .unwrap_or(DEFAULT_QUERY_TIMEOUT_MS);

        let max_results = file.max_results.unwrap_or(DEFAULT_MAX_RESULTS);

        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("VRSJMP_LOG_LEVEL") {
            logging.level = level;
        }

        let backend = BackendConfig::from_file(file.backend);

        Self {
            theme,
            query_timeout_ms,
            max_results,
            logging,
            backend,
        }
    }
}
