//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridpad::keymap::{default_bindings, Keymap};
use gridpad::model::{CellId, CellValue, GridModel};
use gridpad::view::{Notification, RecordingView};
use gridpad::App;

/// Grid with no initial values and a fresh recording view
pub fn test_grid(cell_count: usize, column_count: usize) -> (GridModel, RecordingView) {
    let model = GridModel::new(cell_count, column_count, Vec::new()).expect("valid grid shape");
    (model, RecordingView::new())
}

/// Grid filled row-major from `values`
pub fn grid_with_values(
    cell_count: usize,
    column_count: usize,
    values: Vec<Option<CellValue>>,
) -> (GridModel, RecordingView) {
    let model = GridModel::new(cell_count, column_count, values).expect("valid grid shape");
    (model, RecordingView::new())
}

/// App over a recording view with the default key table
pub fn test_app(cell_count: usize, column_count: usize) -> App<RecordingView> {
    let (model, view) = test_grid(cell_count, column_count);
    App::new(model, view, Keymap::with_bindings(default_bindings()))
}

/// The two notifications issued by a successful move from `from` to `to`
pub fn moved(from: (usize, usize), to: (usize, usize)) -> Vec<Notification> {
    vec![
        Notification::Deselect(CellId::from_xy(from.0, from.1)),
        Notification::Select(CellId::from_xy(to.0, to.1)),
    ]
}
