//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod grid;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::GridModel;
use crate::view::GridView;

#[cfg(debug_assertions)]
use crate::tracing::GridSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use grid::update_grid;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut GridModel, view: &mut dyn GridView, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, view, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, view, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut GridModel, view: &mut dyn GridView, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Grid(m) => grid::update_grid(model, view, m),
        Msg::App(m) => app::update_app(m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after cursor state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut GridModel, view: &mut dyn GridView, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = GridSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, view, msg);

    let after = GridSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "cursor", %diff, "state changed");
    }

    let cursor = model.cursor();
    debug_assert!(
        model.is_cell_present(cursor.x, cursor.y),
        "cursor {} left the grid after {}",
        cursor.id(),
        msg_name
    );

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Grid::Move(Up)`
/// - `Grid::CommitValue(Some(Text("x")))`
/// - `App::Quit`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
