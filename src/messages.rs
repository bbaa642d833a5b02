//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::CellValue;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Grid messages (navigation and editing)
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// Move the cursor one cell in a direction
    Move(Direction),
    /// Highlight a specific cell
    Select { x: usize, y: usize },
    /// Start editing, or commit the staged input when already editing
    EnterOrCommitEdit,
    /// Leave edit mode without committing
    CancelEdit,
    /// Force edit mode on or off
    SetEditMode(bool),
    /// Store a value in the cursor cell and leave edit mode
    CommitValue(Option<CellValue>),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Exit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Grid messages (cursor, edit mode)
    Grid(GridMsg),
    /// App messages (lifecycle)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Grid(GridMsg::Move(direction))
    }

    /// Create a select message
    pub fn select(x: usize, y: usize) -> Self {
        Msg::Grid(GridMsg::Select { x, y })
    }
}
