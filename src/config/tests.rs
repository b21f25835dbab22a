//! Configuration tests
//!
//! These guard the config file format: the generated template must parse back,
//! and every section must survive a round trip through `to_toml()`.

use super::*;
use crate::backend::CatalogEntry;
use serde_json::json;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the default template can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = FileConfig::parse(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved.theme, config.theme);
    assert_eq!(resolved.query_timeout_ms, config.query_timeout_ms);
    assert_eq!(resolved.max_results, config.max_results);
    assert!(resolved.backend.catalog.is_empty());
}

/// Catalog entries with nested actions must survive serialization.
#[test]
fn test_config_roundtrip_with_catalog() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.logging.file_rotation = LogRotation::Hourly;
    config.backend.latency_ms = 40;
    config.backend.catalog = vec![
        CatalogEntry::new("Open \"quoted\" thing", json!(["open", "thing"])),
        CatalogEntry::new("Search", json!({"search": "notes", "limit": 5})),
    ];

    let toml_str = config.to_toml();
    let parsed = FileConfig::parse(&toml_str).unwrap_or_else(|e| {
        panic!("Config with catalog should round-trip.\nTOML:\n{toml_str}\nError: {e:?}")
    });
    let resolved = Config::resolve(parsed, no_env);

    assert_eq!(resolved.theme, "nord");
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(resolved.backend.latency_ms, 40);
    assert_eq!(resolved.backend.catalog, config.backend.catalog);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = FileConfig::parse(
        r#"
theme = "dracula"
query_timeout_ms = 500

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = [
        ("VRSJMP_THEME", "gruvbox"),
        ("VRSJMP_QUERY_TIMEOUT_MS", "750"),
        ("VRSJMP_LOG_LEVEL", "debug"),
    ]
    .into_iter()
    .collect();

    let config = Config::resolve(file, |k| env.get(k).map(|v| v.to_string()));
    assert_eq!(config.theme, "gruvbox");
    assert_eq!(config.query_timeout_ms, 750);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_file_overrides_defaults() {
    let file = FileConfig::parse(
        r#"
query_timeout_ms = 500
max_results = 0

[logging]
file_enabled = true
file_rotation = "never"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, no_env);
    assert_eq!(config.theme, "default");
    assert_eq!(config.query_timeout(), Duration::from_millis(500));
    assert_eq!(config.max_results, 0);
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
    assert_eq!(config.logging.file_prefix, "vrsjmp");
}

#[test]
fn test_unparseable_env_value_falls_back() {
    let config = Config::resolve(FileConfig::default(), |k| {
        (k == "VRSJMP_QUERY_TIMEOUT_MS").then(|| "soon".to_string())
    });
    assert_eq!(config.query_timeout_ms, 2_000);
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors and fallbacks
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(FileConfig::parse("theme = dracula").is_err());
    assert!(FileConfig::parse("query_timeout_ms = \"fast\"").is_err());
}

#[test]
fn test_missing_file_means_defaults() {
    let path = std::env::temp_dir().join("vrsjmp-config-test-does-not-exist.toml");
    let file = Config::load_file_config(&path).unwrap();
    let config = Config::resolve(file, no_env);
    assert_eq!(config.query_timeout_ms, 2_000);
}

#[test]
fn test_empty_catalog_uses_demo_entries() {
    let config = Config::default();
    assert!(!config.backend.entries().is_empty());

    let mut custom = Config::default();
    custom.backend.catalog = vec![CatalogEntry::new("Only", json!("only"))];
    assert_eq!(custom.backend.entries().len(), 1);
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
