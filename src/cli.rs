//! Command-line argument parsing
//!
//! Supports:
//! - Explicit config and keymap files
//! - Overriding the grid shape from the command line
//! - Printing an HTML snapshot instead of starting the terminal UI

use clap::Parser;
use std::path::PathBuf;

use crate::config::GridConfig;

/// A keyboard-driven grid of editable cells
#[derive(Parser, Debug, Default)]
#[command(name = "gridpad", version, about = "A keyboard-driven grid of editable cells")]
pub struct CliArgs {
    /// Config file (YAML, or JSON when the extension is .json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keymap file merged over the default bindings
    #[arg(short, long, value_name = "PATH")]
    pub keymap: Option<PathBuf>,

    /// Number of cells (overrides the config)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub cells: Option<i64>,

    /// Cells per row (overrides the config)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub columns: Option<i64>,

    /// Print the grid as HTML and exit
    #[arg(long)]
    pub markup: bool,
}

impl CliArgs {
    /// Apply shape overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut GridConfig) {
        if let Some(cells) = self.cells {
            config.cell_count = cells;
        }
        if let Some(columns) = self.columns {
            config.column_count = columns;
        }
    }
}
