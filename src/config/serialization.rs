//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;
use crate::backend::CatalogEntry;

/// Render a string as a TOML basic string (quoted and escaped)
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

/// Render an action form as an inline TOML value
///
/// TOML has no null, so forms containing one fall back to their JSON text.
fn toml_action(entry: &CatalogEntry) -> String {
    match toml::Value::try_from(entry.action.as_value()) {
        Ok(value) => value.to_string(),
        Err(_) => toml_string(&entry.action.to_string()),
    }
}

impl Config {
    /// Serialize catalog entries to `[[backend.catalog]]` tables
    pub(super) fn catalog_to_toml(&self) -> String {
        if self.backend.catalog.is_empty() {
            return r#"
# No entries configured: the built-in demo catalog is used.
# Each entry has a title and an action; the action is passed to the
# backend verbatim when the entry is chosen.
#
# [[backend.catalog]]
# title = "Open terminal"
# action = ["open", "terminal"]
#
# [[backend.catalog]]
# title = "Search notes"
# action = { search = "notes" }
"#
            .to_string();
        }

        let mut output = String::from("\n");
        for entry in &self.backend.catalog {
            output.push_str("[[backend.catalog]]\n");
            output.push_str(&format!("title = {}\n", toml_string(&entry.title)));
            output.push_str(&format!("action = {}\n\n", toml_action(entry)));
        }
        output
    }

    /// Generate TOML representation of this config
    pub fn to_toml(&self) -> String {
        format!(
            r#"# vrsjmp configuration
# Generated by vrsjmp v{version}
#
# Environment variables override these values:
#   VRSJMP_THEME, VRSJMP_QUERY_TIMEOUT_MS, VRSJMP_LOG_LEVEL

# Theme: default, dracula, nord, gruvbox
theme = {theme}

# Milliseconds before a query counts as failed
query_timeout_ms = {query_timeout_ms}

# Maximum rows shown in the results list (0 = unlimited)
max_results = {max_results}

[logging]
# Log level: trace, debug, info, warn, error
level = {level}
# Also write JSON logs to files
file_enabled = {file_enabled}
file_dir = {file_dir}
# Rotation: hourly, daily, never
file_rotation = "{file_rotation}"
file_prefix = {file_prefix}

[backend]
# Artificial delay added to every backend call (ms)
latency_ms = {latency_ms}
{catalog}"#,
            version = super::VERSION,
            theme = toml_string(&self.theme),
            query_timeout_ms = self.query_timeout_ms,
            max_results = self.max_results,
            level = toml_string(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = toml_string(&self.logging.file_prefix),
            latency_ms = self.backend.latency_ms,
            catalog = self.catalog_to_toml(),
        )
    }
}
