// TUI module - terminal host for the launcher
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard, mouse, focus changes, timer ticks)
// - Feeding backend completions back into the controller
// - Rendering the UI

pub mod app;
pub mod components;
pub mod keys;
pub mod theme;
pub mod ui;

use crate::backend::Backend;
use crate::config::Config;
use crate::launcher::{Driver, Input};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the launcher in the terminal
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(backend: Arc<dyn Backend>, log_buffer: LogBuffer, config: Config) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )
    .context("Failed to setup terminal")?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend).context("Failed to create terminal")?;

    let (completion_tx, mut completion_rx) = mpsc::channel::<Input>(256);
    let driver = Driver::new(backend.clone(), completion_tx, config.query_timeout());
    let mut app = App::new(&config, log_buffer, backend.name());

    let result = run_event_loop(&mut terminal, &mut app, &driver, &mut completion_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Terminal input (keys, mouse, focus changes)
/// 2. Timer ticks (spinner, toast expiry)
/// 3. Backend completions sent by the driver
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    driver: &Driver,
    completion_rx: &mut mpsc::Receiver<Input>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    // Fill the list before the first keypress
    let effects = app.controller.start();
    app.surface(driver.execute_all(effects));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            maybe_event = next_terminal_event() => {
                if let Some(event) = maybe_event {
                    let effects = app.handle_event(event);
                    app.surface(driver.execute_all(effects));
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(input) = completion_rx.recv() => {
                let effects = app.handle_completion(input);
                app.surface(driver.execute_all(effects));
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Poll the terminal briefly; `None` when nothing arrived
async fn next_terminal_event() -> Option<Event> {
    if event::poll(Duration::from_millis(10)).unwrap_or(false) {
        event::read().ok()
    } else {
        None
    }
}
