//! Configurable keyboard mapping system
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to grid commands
//! - Supports bindings that only apply while browsing or editing
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! crossterm::KeyEvent → Keystroke → Keymap::lookup_with_context() → Command → Vec<Msg>
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Load from embedded defaults
//! let keymap = Keymap::with_bindings(default_bindings());
//!
//! // Or defaults merged with ~/.config/gridpad/keymap.yaml
//! let keymap = Keymap::with_bindings(load_default_keymap(None)?);
//! ```

mod binding;
mod command;
mod config;
mod context;
mod crossterm_adapter;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use crossterm_adapter::keystroke_from_crossterm;
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
