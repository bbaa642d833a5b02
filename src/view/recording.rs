//! A `GridView` that records every callback

use crate::model::{CellId, CellValue};

use super::GridView;

/// One presentation callback, as issued by the model
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Deselect(CellId),
    Select(CellId),
    ShowEditor(Option<CellValue>),
    HideEditor,
    RefreshCell(CellId, Option<CellValue>),
}

/// Headless view that keeps a log of notifications
///
/// `pending_input` plays the role of the staged editor text.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub notifications: Vec<Notification>,
    pub pending_input: Option<CellValue>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a value to be returned by the next `read_pending_input`
    pub fn stage_input(&mut self, value: impl Into<CellValue>) {
        self.pending_input = Some(value.into());
    }

    /// Drop all recorded notifications
    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    pub fn count(&self, pred: impl Fn(&Notification) -> bool) -> usize {
        self.notifications.iter().filter(|n| pred(n)).count()
    }

    pub fn show_editor_count(&self) -> usize {
        self.count(|n| matches!(n, Notification::ShowEditor(_)))
    }

    pub fn hide_editor_count(&self) -> usize {
        self.count(|n| matches!(n, Notification::HideEditor))
    }

    pub fn refresh_count(&self) -> usize {
        self.count(|n| matches!(n, Notification::RefreshCell(..)))
    }

    pub fn selection_count(&self) -> usize {
        self.count(|n| matches!(n, Notification::Select(_) | Notification::Deselect(_)))
    }
}

impl GridView for RecordingView {
    fn deselect(&mut self, cell: CellId) {
        self.notifications.push(Notification::Deselect(cell));
    }

    fn select(&mut self, cell: CellId) {
        self.notifications.push(Notification::Select(cell));
    }

    fn show_editor(&mut self, current: Option<&CellValue>) {
        self.notifications
            .push(Notification::ShowEditor(current.cloned()));
    }

    fn hide_editor(&mut self) {
        self.notifications.push(Notification::HideEditor);
    }

    fn refresh_cell(&mut self, cell: CellId, value: Option<&CellValue>) {
        self.notifications
            .push(Notification::RefreshCell(cell, value.cloned()));
    }

    fn read_pending_input(&mut self) -> Option<CellValue> {
        self.pending_input.clone()
    }
}
