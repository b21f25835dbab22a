// vrsjmp - keyboard launcher
//
// Type a query, the backend answers with a list of results, move focus with
// the keyboard and press Enter to run the focused result's action.
//
// Architecture:
// - Launcher: sans-IO controller (query session, focus tracker, commit)
//   that turns user input into effects
// - Driver: runs effects against the backend on tokio tasks and feeds
//   completions back through an mpsc channel
// - Backend: trait boundary; the bundled catalog backend filters a list of
//   entries from the config file
// - TUI (ratatui): renders the launcher and translates terminal events

mod backend;
mod cli;
mod config;
mod launcher;
mod logging;
mod tui;

use anyhow::Result;
use backend::{Backend, CatalogBackend};
use clap::Parser;
use config::Config;
use logging::{LogBuffer, LogOutput};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // One-shot commands (query, config ...) exit early
    if cli::handle_cli(cli::Cli::parse()).await? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;

    // The TUI owns the terminal, so logs go to the in-memory buffer
    let log_buffer = LogBuffer::new();
    let _log_guard = logging::init(&config.logging, LogOutput::Buffer(log_buffer.clone()));

    let catalog = CatalogBackend::new(config.backend.entries())
        .with_latency(Duration::from_millis(config.backend.latency_ms));
    tracing::info!(
        "Starting vrsjmp v{} with {} catalog entries, theme {}",
        config::VERSION,
        catalog.len(),
        config.theme
    );

    let backend: Arc<dyn Backend> = Arc::new(catalog);
    tui::run_tui(backend, log_buffer, config).await?;

    tracing::info!("Launcher closed");
    Ok(())
}
