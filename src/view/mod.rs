//! Presentation interface
//!
//! The grid model never draws anything itself. Every visible consequence of
//! a model operation is requested through [`GridView`], which the terminal
//! front end (and the test recorder) implement.

pub mod markup;
mod recording;

use std::borrow::Cow;

use crate::model::{CellId, CellValue};

pub use recording::{Notification, RecordingView};

/// Text shown for a cell that holds no value
pub const EMPTY_PLACEHOLDER: &str = "·";

/// Callbacks the grid model uses to keep a presentation in sync
pub trait GridView {
    /// Remove the highlighted state from a cell
    fn deselect(&mut self, cell: CellId);

    /// Put a cell into the highlighted state
    fn select(&mut self, cell: CellId);

    /// Reveal the input surface, pre-filled with the current cell's value
    fn show_editor(&mut self, current: Option<&CellValue>);

    /// Conceal the input surface
    fn hide_editor(&mut self);

    /// Rewrite the displayed content of a cell
    fn refresh_cell(&mut self, cell: CellId, value: Option<&CellValue>);

    /// Whatever the user currently has staged in the input surface
    fn read_pending_input(&mut self) -> Option<CellValue>;
}

/// Display text for a cell value
///
/// Unset cells render as [`EMPTY_PLACEHOLDER`]. Falsy values such as `0` or
/// empty text render as themselves.
pub fn display_value(value: Option<&CellValue>) -> Cow<'static, str> {
    match value {
        None => Cow::Borrowed(EMPTY_PLACEHOLDER),
        Some(CellValue::Text(s)) => Cow::Owned(s.clone()),
        Some(v) => Cow::Owned(v.to_string()),
    }
}
