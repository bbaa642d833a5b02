//! Command enum representing all bindable grid actions
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one or more `Msg` values for the Elm-style update loop.

use std::fmt;
use std::str::FromStr;

use crate::messages::{AppMsg, Direction, GridMsg, Msg};

/// All grid commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Navigation
    // ========================================================================
    /// Move the highlighted cell up one row
    MoveUp,
    /// Move the highlighted cell down one row
    MoveDown,
    /// Move the highlighted cell left one column
    MoveLeft,
    /// Move the highlighted cell right one column
    MoveRight,

    // ========================================================================
    // Editing
    // ========================================================================
    /// Start editing, or save and stop editing
    EnterOrCommitEdit,
    /// Stop editing without saving
    CancelEdit,

    // ========================================================================
    // Special
    // ========================================================================
    Quit,
    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        match self {
            MoveUp => vec![Msg::move_cursor(Direction::Up)],
            MoveDown => vec![Msg::move_cursor(Direction::Down)],
            MoveLeft => vec![Msg::move_cursor(Direction::Left)],
            MoveRight => vec![Msg::move_cursor(Direction::Right)],

            EnterOrCommitEdit => vec![Msg::Grid(GridMsg::EnterOrCommitEdit)],
            CancelEdit => vec![Msg::Grid(GridMsg::CancelEdit)],

            Quit => vec![Msg::App(AppMsg::Quit)],
            Unbound => vec![], // Explicitly does nothing
        }
    }

    /// Short label for status-bar hints
    pub fn label(self) -> &'static str {
        match self {
            Command::MoveUp => "up",
            Command::MoveDown => "down",
            Command::MoveLeft => "left",
            Command::MoveRight => "right",
            Command::EnterOrCommitEdit => "edit/save",
            Command::CancelEdit => "cancel",
            Command::Quit => "quit",
            Command::Unbound => "unbound",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Implement FromStr for Command to parse from YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveUp" => Ok(Command::MoveUp),
            "MoveDown" => Ok(Command::MoveDown),
            "MoveLeft" => Ok(Command::MoveLeft),
            "MoveRight" => Ok(Command::MoveRight),
            "EnterOrCommitEdit" => Ok(Command::EnterOrCommitEdit),
            "CancelEdit" => Ok(Command::CancelEdit),
            "Quit" => Ok(Command::Quit),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
