// Logging module - tracing setup and in-memory capture for the TUI
//
// While the TUI owns the terminal, log lines must not be written to stdout or
// stderr (they would garble the alternate screen). A custom tracing layer
// captures events into a bounded buffer instead; the status line shows the
// latest warning or error from it.

use crate::config::{LogRotation, LoggingConfig};
use chrono::{DateTime, Local, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// One-line form for the status line: `12:04:31 WARN launcher::driver: message`
    pub fn summary(&self) -> String {
        let target = self.target.strip_prefix("vrsjmp::").unwrap_or(&self.target);
        format!(
            "{} {} {}: {}",
            self.timestamp.with_timezone(&Local).format("%H:%M:%S"),
            self.level.as_str(),
            target,
            self.message
        )
    }
}

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Warnings and errors are surfaced in the status line
    pub fn is_problem(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Warn)
    }
}

/// In-memory log buffer with bounded size (ring buffer)
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    /// Add a log entry to the buffer
    /// If the buffer is full, removes the oldest entry
    pub fn add(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Most recent warning or error, if any
    pub fn latest_problem(&self) -> Option<LogEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|e| e.level.is_problem())
            .cloned()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Custom tracing layer that captures logs to a buffer
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut message = String::new();
        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        self.buffer.add(LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::from(metadata.level()),
            target: metadata.target().to_string(),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Filtering happens at subscriber level
        true
    }
}

/// Visitor to extract the message from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Remove the quotes that Debug adds
            if self.0.len() >= 2 && self.0.starts_with('"') && self.0.ends_with('"') {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

/// Where human-readable log lines go
pub enum LogOutput {
    /// Capture into the in-memory buffer (TUI owns the terminal)
    Buffer(LogBuffer),
    /// Plain formatted lines on stderr (one-shot CLI commands)
    Stderr,
}

/// Install the global tracing subscriber
///
/// Precedence for the filter: RUST_LOG env var > config level > "info".
/// When file logging is enabled, JSON lines are also written through a
/// non-blocking rolling appender; the returned guard must be kept alive for
/// the whole program so buffered lines are flushed on exit.
pub fn init(config: &LoggingConfig, output: LogOutput) -> Option<WorkerGuard> {
    let default_filter = format!("vrsjmp={}", config.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = if config.file_enabled {
        match std::fs::create_dir_all(&config.file_dir) {
            Ok(()) => {
                let appender = match config.file_rotation {
                    LogRotation::Hourly => {
                        tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
                    }
                    LogRotation::Daily => {
                        tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix)
                    }
                    LogRotation::Never => {
                        tracing_appender::rolling::never(&config.file_dir, &config.file_prefix)
                    }
                };
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let (buffer_layer, stderr_layer) = match output {
        LogOutput::Buffer(buffer) => (Some(TuiLogLayer::new(buffer)), None),
        LogOutput::Stderr => (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            buffer.add(LogEntry {
                timestamp: Utc::now(),
                level: LogLevel::Info,
                target: "vrsjmp".to_string(),
                message: format!("line {i}"),
            });
        }
        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);
    }

    #[test]
    fn test_layer_captures_latest_problem() {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("Query failed: timeout");
            tracing::info!("Committing \"A\"");
        });

        let problem = buffer.latest_problem().expect("a warning was logged");
        assert_eq!(problem.level, LogLevel::Warn);
        assert_eq!(problem.message, "Query failed: timeout");
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_summary_shows_time_level_and_short_target() {
        let timestamp = Utc::now();
        let entry = LogEntry {
            timestamp,
            level: LogLevel::Error,
            target: "vrsjmp::launcher::controller".to_string(),
            message: "Dispatch failed".to_string(),
        };
        let expected = format!(
            "{} ERROR launcher::controller: Dispatch failed",
            timestamp.with_timezone(&Local).format("%H:%M:%S")
        );
        assert_eq!(entry.summary(), expected);
    }
}
