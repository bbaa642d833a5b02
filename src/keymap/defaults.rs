//! Default keybindings for the grid
//!
//! These are the standard keybindings that ship with gridpad.
//! Loaded from the embedded keymap.yaml, falling back to hardcoded defaults.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml, KeymapError};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap source
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. `explicit` path if given, otherwise `~/.config/gridpad/keymap.yaml`
///
/// An explicit path that fails to load is an error. A broken file at the
/// default location is logged and skipped.
pub fn load_default_keymap(explicit: Option<&Path>) -> Result<Vec<Keybinding>, KeymapError> {
    let bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(path) = explicit {
        let user_bindings = load_keymap_file(path)?;
        tracing::info!(
            "Merging keymap from {} ({} bindings)",
            path.display(),
            user_bindings.len()
        );
        return Ok(merge_bindings(bindings, user_bindings));
    }

    let Some(user_path) = crate::config_paths::keymap_file() else {
        return Ok(bindings);
    };
    if !user_path.exists() {
        return Ok(bindings);
    }

    match load_keymap_file(&user_path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                user_path.display(),
                user_bindings.len()
            );
            Ok(merge_bindings(bindings, user_bindings))
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load user keymap from {}: {}",
                user_path.display(),
                e
            );
            Ok(bindings)
        }
    }
}

/// Merge user bindings into base bindings
///
/// User bindings override or extend base bindings:
/// - If user binding has same keystroke + conditions → replaces base
/// - If user binding command is `Unbound` → removes matching base bindings
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        let existing_idx = result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke && b.when == user_binding.when);

        match existing_idx {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default keybindings
pub fn default_bindings() -> Vec<Keybinding> {
    let none = Modifiers::NONE;

    vec![
        // ====================================================================
        // Navigation
        // ====================================================================
        bind(KeyCode::Up, none, Command::MoveUp),
        bind(KeyCode::Down, none, Command::MoveDown),
        bind(KeyCode::Left, none, Command::MoveLeft),
        bind(KeyCode::Right, none, Command::MoveRight),
        // ====================================================================
        // Editing
        // ====================================================================
        bind(KeyCode::Enter, none, Command::EnterOrCommitEdit),
        bind(KeyCode::Escape, none, Command::CancelEdit),
        // ====================================================================
        // App
        // ====================================================================
        bind(KeyCode::Char('q'), Modifiers::CTRL, Command::Quit),
        bind(KeyCode::Char('q'), none, Command::Quit).when_single(Condition::Browsing),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
