//! Grid update functions
//!
//! Handles GridMsg messages for navigation and cell editing.

use crate::commands::Cmd;
use crate::messages::GridMsg;
use crate::model::GridModel;
use crate::view::GridView;

/// Handle grid messages
///
/// Returns `Cmd::Redraw` only when the message changed visible state.
pub fn update_grid(model: &mut GridModel, view: &mut dyn GridView, msg: GridMsg) -> Option<Cmd> {
    let changed = match msg {
        GridMsg::Move(direction) => model.move_in(direction, view),
        GridMsg::Select { x, y } => model.select(x, y, view),
        GridMsg::EnterOrCommitEdit => {
            model.enter_or_commit_edit(view);
            true
        }
        GridMsg::CancelEdit => {
            let was_editing = model.is_editing();
            model.cancel_edit(view);
            was_editing
        }
        GridMsg::SetEditMode(editing) => {
            let changed = model.is_editing() != editing;
            model.set_edit_mode(editing, view);
            changed
        }
        GridMsg::CommitValue(value) => {
            let was_editing = model.is_editing();
            model.commit_value(value, view);
            was_editing
        }
    };

    changed.then_some(Cmd::Redraw)
}
