//! Grid model - the complete state of the grid
//!
//! This module contains the state types the update functions operate on.
//! Nothing here draws; visible effects go through [`crate::view::GridView`].

pub mod cell;
pub mod grid;
pub mod layout;

pub use cell::{CellId, CellPosition, CellValue};
pub use grid::{EditMode, GridError, GridModel, MAX_CELLS};
pub use layout::RowLayout;
