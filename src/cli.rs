// CLI module - command-line argument parsing and handlers
//
// Provides subcommands besides the interactive launcher:
// - query <TEXT>: Run one query against the catalog and print the results
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Rewrite config with the current layout, keeping values

use crate::backend::{Backend, CatalogBackend};
use crate::config::{Config, VERSION};
use crate::logging::{self, LogOutput};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;
use std::time::Duration;

/// vrsjmp - keyboard launcher
#[derive(Parser)]
#[command(name = "vrsjmp")]
#[command(version = VERSION)]
#[command(about = "Keyboard-driven launcher: type, pick, run", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single query and print `title<TAB>action` per result
    Query {
        /// Query text (words are joined with spaces)
        text: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with the current layout (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub async fn handle_cli(cli: Cli) -> Result<bool> {
    match cli.command {
        Some(Commands::Query { text }) => {
            handle_query(&text.join(" ")).await?;
            Ok(true)
        }
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show()?;
            } else if reset {
                handle_config_reset()?;
            } else if edit {
                handle_config_edit()?;
            } else if update {
                handle_config_update()?;
            } else {
                println!("Usage: vrsjmp config [--show|--reset|--edit|--update|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --update  Update config with the current layout (preserves user values)");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the launcher
    }
}

async fn handle_query(text: &str) -> Result<()> {
    let config = Config::from_env()?;
    let _log_guard = logging::init(&config.logging, LogOutput::Stderr);
    let backend = CatalogBackend::new(config.backend.entries())
        .with_latency(Duration::from_millis(config.backend.latency_ms));

    let mut items = tokio::time::timeout(config.query_timeout(), backend.query(text.to_string()))
        .await
        .context("Query timed out")??;

    if config.max_results > 0 {
        items.truncate(config.max_results);
    }

    let mut out = std::io::stdout().lock();
    for item in &items {
        writeln!(out, "{}\t{}", item.title, item.on_click)?;
    }
    Ok(())
}

fn require_config_path() -> Result<std::path::PathBuf> {
    match Config::config_path() {
        Some(path) => Ok(path),
        None => bail!("Could not determine config path"),
    }
}

fn handle_config_path() -> Result<()> {
    println!("{}", require_config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = require_config_path()?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&path, Config::default().to_toml()).context("Failed to write config")?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = require_config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}' (set $EDITOR to your preferred editor)",
            editor
        )
    })?;

    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

fn handle_config_update() -> Result<()> {
    let path = require_config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return Ok(());
    }

    // Fails on a broken file instead of overwriting it with defaults
    let updated = Config::from_env()?.to_toml();

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    std::fs::write(&path, updated).context("Failed to write config")?;

    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_words_are_collected() {
        let cli = Cli::parse_from(["vrsjmp", "query", "open", "term"]);
        match cli.command {
            Some(Commands::Query { text }) => assert_eq!(text.join(" "), "open term"),
            _ => panic!("expected query subcommand"),
        }
    }

    #[test]
    fn test_no_subcommand_runs_launcher() {
        let cli = Cli::parse_from(["vrsjmp"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::parse_from(["vrsjmp", "config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, show: false, .. })
        ));
    }
}
