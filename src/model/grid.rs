//! Grid state: cell storage, cursor and edit mode
//!
//! Every operation that has a visible effect reports it through a
//! [`GridView`]. Rejected operations (out of range, blocked by edit mode)
//! leave the state untouched and issue no notifications.

use std::fmt;

use crate::messages::Direction;
use crate::view::GridView;

use super::cell::{CellId, CellPosition, CellValue};
use super::layout::RowLayout;

/// The two modes of the edit-mode state machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Cursor moves freely, no input surface
    #[default]
    Browsing,
    /// The cursor cell is being edited; navigation is blocked
    Editing,
}

/// Largest grid [`GridModel::new`] will build
pub const MAX_CELLS: usize = 1 << 20;

/// Errors raised when building or addressing a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Column count was below 1
    InvalidColumnCount(i64),
    /// Grid would contain no cells, leaving the cursor nowhere to point
    EmptyGrid,
    /// Cell count above [`MAX_CELLS`]
    TooManyCells(u64),
    /// Coordinates do not address an existing cell
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidColumnCount(n) => {
                write!(f, "Invalid column count: {} (must be at least 1)", n)
            }
            GridError::EmptyGrid => write!(f, "Grid must contain at least one cell"),
            GridError::TooManyCells(n) => {
                write!(f, "Too many cells: {} (at most {})", n, MAX_CELLS)
            }
            GridError::OutOfBounds { x, y } => {
                write!(f, "No cell at column {}, row {}", x, y)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A row-major grid of optional cell values with a single cursor
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    rows: Vec<Vec<Option<CellValue>>>,
    column_count: usize,
    cursor: CellPosition,
    mode: EditMode,
}

impl GridModel {
    /// Build a grid of `cell_count` cells, `column_count` wide
    ///
    /// Initial values are consumed in row-major order; missing ones are unset
    /// and surplus ones are ignored.
    pub fn new(
        cell_count: usize,
        column_count: usize,
        initial_values: Vec<Option<CellValue>>,
    ) -> Result<Self, GridError> {
        if column_count == 0 {
            return Err(GridError::InvalidColumnCount(0));
        }
        if cell_count == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cell_count > MAX_CELLS {
            return Err(GridError::TooManyCells(cell_count as u64));
        }

        let layout = RowLayout::partition(cell_count, column_count);
        let mut values = initial_values.into_iter();
        let rows = layout
            .row_lengths()
            .iter()
            .map(|&len| (0..len).map(|_| values.next().flatten()).collect())
            .collect();

        tracing::debug!(
            cell_count,
            column_count,
            row_count = layout.row_count(),
            "Built grid"
        );

        Ok(Self {
            rows,
            column_count,
            cursor: CellPosition::default(),
            mode: EditMode::Browsing,
        })
    }

    // ========================================================================
    // Shape
    // ========================================================================

    /// Configured number of columns
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Length of row `y`, which may be short for the last row
    pub fn row_len(&self, y: usize) -> Option<usize> {
        self.rows.get(y).map(Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Option<CellValue>>] {
        &self.rows
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellPosition, Option<&CellValue>)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, value)| (CellPosition::new(x, y), value.as_ref()))
        })
    }

    /// Identifier for the cell at `(x, y)`
    pub fn cell_id_from_xy(x: usize, y: usize) -> CellId {
        CellId::from_xy(x, y)
    }

    /// Whether `(x, y)` addresses an existing cell, short last row included
    pub fn is_cell_present(&self, x: usize, y: usize) -> bool {
        self.rows.get(y).is_some_and(|row| x < row.len())
    }

    pub fn corner_top_left(&self) -> CellId {
        CellId::from_xy(0, 0)
    }

    pub fn corner_top_right(&self) -> CellId {
        let width = self.rows.first().map_or(1, Vec::len);
        CellId::from_xy(width.saturating_sub(1), 0)
    }

    pub fn corner_bottom_left(&self) -> CellId {
        CellId::from_xy(0, self.last_row())
    }

    /// Last cell of the last row (which may be short)
    pub fn corner_bottom_right(&self) -> CellId {
        let last = self.last_row();
        let width = self.row_len(last).unwrap_or(1);
        CellId::from_xy(width.saturating_sub(1), last)
    }

    fn last_row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    // ========================================================================
    // Cursor and mode
    // ========================================================================

    pub fn cursor(&self) -> CellPosition {
        self.cursor
    }

    pub fn cursor_id(&self) -> CellId {
        self.cursor.id()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Value at `(x, y)`; absent coordinates are a caller error
    pub fn value_at(&self, x: usize, y: usize) -> Result<Option<&CellValue>, GridError> {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .map(Option::as_ref)
            .ok_or(GridError::OutOfBounds { x, y })
    }

    /// Value under the cursor
    pub fn current_value(&self) -> Option<&CellValue> {
        self.rows[self.cursor.y][self.cursor.x].as_ref()
    }

    /// Overwrite the cursor cell and refresh its displayed content
    pub fn set_current_value<V: GridView + ?Sized>(
        &mut self,
        value: Option<CellValue>,
        view: &mut V,
    ) {
        let CellPosition { x, y } = self.cursor;
        self.rows[y][x] = value;
        view.refresh_cell(self.cursor.id(), self.rows[y][x].as_ref());
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Make `(x, y)` the highlighted cell
    ///
    /// Ignored while editing or when `(x, y)` is not a cell. Returns whether
    /// the cursor moved.
    pub fn select<V: GridView + ?Sized>(&mut self, x: usize, y: usize, view: &mut V) -> bool {
        if self.is_editing() || !self.is_cell_present(x, y) {
            tracing::trace!(x, y, mode = ?self.mode, "Select rejected");
            return false;
        }

        view.deselect(self.cursor.id());
        view.select(CellId::from_xy(x, y));
        self.cursor = CellPosition::new(x, y);
        true
    }

    pub fn move_left<V: GridView + ?Sized>(&mut self, view: &mut V) -> bool {
        if self.is_editing() {
            return false;
        }
        let CellPosition { x, y } = self.cursor;
        if x == 0 {
            return false;
        }
        self.select(x - 1, y, view)
    }

    pub fn move_right<V: GridView + ?Sized>(&mut self, view: &mut V) -> bool {
        if self.is_editing() {
            return false;
        }
        let CellPosition { x, y } = self.cursor;
        if x + 1 >= self.rows[y].len() {
            return false;
        }
        self.select(x + 1, y, view)
    }

    pub fn move_up<V: GridView + ?Sized>(&mut self, view: &mut V) -> bool {
        if self.is_editing() {
            return false;
        }
        let CellPosition { x, y } = self.cursor;
        if y == 0 {
            return false;
        }
        self.select(x, y - 1, view)
    }

    /// Move down one row; a shorter last row without a cell below is a no-op
    pub fn move_down<V: GridView + ?Sized>(&mut self, view: &mut V) -> bool {
        if self.is_editing() {
            return false;
        }
        let CellPosition { x, y } = self.cursor;
        if y + 1 >= self.rows.len() {
            return false;
        }
        self.select(x, y + 1, view)
    }

    pub fn move_in<V: GridView + ?Sized>(&mut self, direction: Direction, view: &mut V) -> bool {
        match direction {
            Direction::Up => self.move_up(view),
            Direction::Down => self.move_down(view),
            Direction::Left => self.move_left(view),
            Direction::Right => self.move_right(view),
        }
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Confirm key: start editing, or commit the staged input and stop
    pub fn enter_or_commit_edit<V: GridView + ?Sized>(&mut self, view: &mut V) {
        if self.is_editing() {
            let input = view.read_pending_input();
            self.commit_value(input, view);
        } else {
            self.set_edit_mode(true, view);
        }
    }

    /// Switch modes; no notification when the mode is unchanged
    pub fn set_edit_mode<V: GridView + ?Sized>(&mut self, editing: bool, view: &mut V) {
        if self.is_editing() == editing {
            return;
        }

        if editing {
            self.mode = EditMode::Editing;
            view.show_editor(self.current_value());
        } else {
            self.mode = EditMode::Browsing;
            view.hide_editor();
        }
        tracing::debug!(mode = ?self.mode, cell = %self.cursor.id(), "Edit mode changed");
    }

    /// Leave edit mode, discarding staged input
    pub fn cancel_edit<V: GridView + ?Sized>(&mut self, view: &mut V) {
        self.set_edit_mode(false, view);
    }

    /// Store `input` in the cursor cell (if it differs) and leave edit mode
    ///
    /// Only meaningful while editing; in browsing mode this does nothing.
    pub fn commit_value<V: GridView + ?Sized>(&mut self, input: Option<CellValue>, view: &mut V) {
        if !self.is_editing() {
            return;
        }

        if self.current_value() != input.as_ref() {
            tracing::debug!(cell = %self.cursor.id(), value = ?input, "Committing cell value");
            self.set_current_value(input, view);
        }

        self.set_edit_mode(false, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Notification, RecordingView};

    fn grid(cells: usize, columns: usize) -> GridModel {
        GridModel::new(cells, columns, Vec::new()).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_columns() {
        assert_eq!(
            GridModel::new(4, 0, Vec::new()),
            Err(GridError::InvalidColumnCount(0))
        );
    }

    #[test]
    fn test_new_rejects_empty_grid() {
        assert_eq!(GridModel::new(0, 3, Vec::new()), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_new_rejects_oversized_grid() {
        assert_eq!(
            GridModel::new(usize::MAX, 1, Vec::new()),
            Err(GridError::TooManyCells(usize::MAX as u64))
        );
        assert!(GridModel::new(MAX_CELLS, 1024, Vec::new()).is_ok());
    }

    #[test]
    fn test_initial_values_fill_row_major() {
        let values = vec![Some(1_i64.into()), None, Some("c".into())];
        let model = GridModel::new(5, 2, values).unwrap();

        assert_eq!(model.value_at(0, 0), Ok(Some(&CellValue::Number(1.0))));
        assert_eq!(model.value_at(1, 0), Ok(None));
        assert_eq!(model.value_at(0, 1), Ok(Some(&CellValue::text("c"))));
        assert_eq!(model.value_at(1, 1), Ok(None));
        assert_eq!(model.value_at(0, 2), Ok(None));
    }

    #[test]
    fn test_surplus_initial_values_ignored() {
        let values = (0..10).map(|n| Some(CellValue::from(n as i64))).collect();
        let model = GridModel::new(3, 3, values).unwrap();
        assert_eq!(model.cell_count(), 3);
        assert_eq!(model.value_at(2, 0), Ok(Some(&CellValue::Number(2.0))));
    }

    #[test]
    fn test_value_at_out_of_bounds() {
        let model = grid(5, 2);
        assert_eq!(
            model.value_at(1, 2),
            Err(GridError::OutOfBounds { x: 1, y: 2 })
        );
    }

    #[test]
    fn test_is_cell_present_short_last_row() {
        let model = grid(5, 2);
        assert!(model.is_cell_present(0, 2));
        assert!(!model.is_cell_present(1, 2));
        assert!(!model.is_cell_present(0, 3));
        assert!(!model.is_cell_present(2, 0));
    }

    #[test]
    fn test_select_notifies_once_each() {
        let mut model = grid(6, 2);
        let mut view = RecordingView::new();

        assert!(model.select(1, 2, &mut view));
        assert_eq!(
            view.notifications,
            vec![
                Notification::Deselect(CellId::from_xy(0, 0)),
                Notification::Select(CellId::from_xy(1, 2)),
            ]
        );
        assert_eq!(model.cursor(), CellPosition::new(1, 2));
    }

    #[test]
    fn test_select_absent_cell_is_silent() {
        let mut model = grid(5, 2);
        let mut view = RecordingView::new();

        assert!(!model.select(1, 2, &mut view));
        assert!(view.notifications.is_empty());
        assert_eq!(model.cursor(), CellPosition::new(0, 0));
    }

    #[test]
    fn test_move_down_onto_short_row_rejected() {
        let mut model = grid(5, 2);
        let mut view = RecordingView::new();
        model.select(1, 1, &mut view);
        view.clear();

        assert!(!model.move_down(&mut view));
        assert_eq!(model.cursor(), CellPosition::new(1, 1));
        assert!(view.notifications.is_empty());
    }

    #[test]
    fn test_move_right_stops_at_short_row_end() {
        let mut model = grid(5, 2);
        let mut view = RecordingView::new();
        model.select(0, 2, &mut view);

        assert!(!model.move_right(&mut view));
        assert_eq!(model.cursor(), CellPosition::new(0, 2));
    }

    #[test]
    fn test_set_current_value_refreshes() {
        let mut model = grid(4, 2);
        let mut view = RecordingView::new();

        model.set_current_value(Some("hi".into()), &mut view);
        assert_eq!(model.current_value(), Some(&CellValue::text("hi")));
        assert_eq!(
            view.notifications,
            vec![Notification::RefreshCell(
                CellId::from_xy(0, 0),
                Some(CellValue::text("hi"))
            )]
        );
    }

    #[test]
    fn test_commit_while_browsing_is_noop() {
        let mut model = grid(4, 2);
        let mut view = RecordingView::new();

        model.commit_value(Some("x".into()), &mut view);
        assert_eq!(model.current_value(), None);
        assert!(view.notifications.is_empty());
    }

    #[test]
    fn test_corners_on_short_grid() {
        let model = grid(5, 2);
        assert_eq!(model.corner_top_left().to_string(), "1-1");
        assert_eq!(model.corner_top_right().to_string(), "2-1");
        assert_eq!(model.corner_bottom_left().to_string(), "1-3");
        assert_eq!(model.corner_bottom_right().to_string(), "1-3");
    }

    #[test]
    fn test_corners_single_row() {
        let model = grid(3, 5);
        assert_eq!(model.corner_top_right().to_string(), "3-1");
        assert_eq!(model.corner_bottom_left().to_string(), "1-1");
        assert_eq!(model.corner_bottom_right().to_string(), "3-1");
    }

    #[test]
    fn test_cells_row_major() {
        let model = grid(3, 2);
        let positions: Vec<_> = model.cells().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            vec![
                CellPosition::new(0, 0),
                CellPosition::new(1, 0),
                CellPosition::new(0, 1),
            ]
        );
    }
}
