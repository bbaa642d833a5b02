//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! cursor movement and edit-mode transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=debug,message=debug` - scoped filtering
//! - `RUST_LOG=gridpad::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/gridpad/logs/gridpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{CellPosition, EditMode, GridModel};

/// Initialize tracing subscriber with optional console and file logging
///
/// The interactive grid owns the terminal, so console output is only
/// enabled for non-interactive runs. Console output respects RUST_LOG.
///
/// File logging writes to `~/.config/gridpad/logs/gridpad.log` with daily rotation.
pub fn init(console: bool) {
    let console_layer = console.then(|| {
        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
            .with_filter(console_filter)
    });

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::LOG_FILE_PREFIX,
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            if console {
                eprintln!("Warning: Could not initialize file logging: {}", e);
            }
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/mode state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSnapshot {
    pub cursor: CellPosition,
    pub mode: EditMode,
}

impl GridSnapshot {
    pub fn from_model(model: &GridModel) -> Self {
        Self {
            cursor: model.cursor(),
            mode: model.mode(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.cursor != other.cursor {
            changes.push(format!(
                "cursor: {} → {}",
                self.cursor.id(),
                other.cursor.id()
            ));
        }
        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
