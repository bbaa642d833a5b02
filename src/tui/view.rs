//! Terminal-side mirror of the grid
//!
//! [`TerminalView`] keeps exactly what the screen needs: the display text of
//! every cell, which cell is highlighted and the state of the input line.
//! The model keeps it current through the [`GridView`] callbacks.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{CellId, CellValue, GridModel};
use crate::theme::{Palette, Theme};
use crate::view::{display_value, GridView};

#[derive(Debug, Clone)]
pub struct TerminalView {
    /// Display text per cell, `[row][column]`
    texts: Vec<Vec<String>>,
    highlighted: Option<CellId>,
    editor_open: bool,
    input: String,
    /// Value the editor opened on and the text it was shown as
    prefill: Option<(Option<CellValue>, String)>,
    palette: Palette,
}

impl TerminalView {
    /// Build a view that reflects the model's current state
    pub fn from_model(model: &GridModel, theme: &Theme) -> Self {
        let texts = model
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|value| display_value(value.as_ref()).into_owned())
                    .collect()
            })
            .collect();

        Self {
            texts,
            highlighted: Some(model.cursor_id()),
            editor_open: model.is_editing(),
            input: String::new(),
            prefill: None,
            palette: theme.palette(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.texts
    }

    pub fn cell_text(&self, id: CellId) -> Option<&str> {
        let pos = id.position();
        self.texts.get(pos.y)?.get(pos.x).map(String::as_str)
    }

    pub fn highlighted(&self) -> Option<CellId> {
        self.highlighted
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    /// Current contents of the input line
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Apply a text-editing key to the input line
    ///
    /// Returns false when the editor is closed or the key does not edit text.
    pub fn edit_input(&mut self, key: &KeyEvent) -> bool {
        if !self.editor_open {
            return false;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                true
            }
            KeyCode::Backspace => self.input.pop().is_some(),
            _ => false,
        }
    }
}

/// Interpret the input line as a cell value
///
/// Empty input clears the cell. Text that reads as a finite number is stored
/// as a number; anything else is stored verbatim.
pub fn parse_input(input: &str) -> Option<CellValue> {
    if input.is_empty() {
        return None;
    }
    match input.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Some(CellValue::Number(n)),
        _ => Some(CellValue::Text(input.to_string())),
    }
}

impl GridView for TerminalView {
    fn deselect(&mut self, cell: CellId) {
        if self.highlighted == Some(cell) {
            self.highlighted = None;
        }
    }

    fn select(&mut self, cell: CellId) {
        self.highlighted = Some(cell);
    }

    fn show_editor(&mut self, current: Option<&CellValue>) {
        self.editor_open = true;
        self.input = current.map(ToString::to_string).unwrap_or_default();
        self.prefill = Some((current.cloned(), self.input.clone()));
    }

    fn hide_editor(&mut self) {
        self.editor_open = false;
        self.input.clear();
        self.prefill = None;
    }

    fn refresh_cell(&mut self, cell: CellId, value: Option<&CellValue>) {
        let pos = cell.position();
        match self.texts.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            Some(text) => *text = display_value(value).into_owned(),
            None => tracing::warn!(%cell, "Refresh for a cell the view does not have"),
        }
    }

    /// Untouched input hands back the original value, so confirming
    /// without typing never retypes a cell
    fn read_pending_input(&mut self) -> Option<CellValue> {
        match &self.prefill {
            Some((original, text)) if *text == self.input => original.clone(),
            _ => parse_input(&self.input),
        }
    }
}
