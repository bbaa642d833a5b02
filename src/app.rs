//! Application shell: grid model, presentation and keymap
//!
//! Keystrokes are resolved against the keymap using the current edit mode,
//! expanded into messages and run through [`update`].

use crate::commands::Cmd;
use crate::keymap::{Command, KeyContext, Keymap, Keystroke};
use crate::messages::Msg;
use crate::model::GridModel;
use crate::update::update;
use crate::view::GridView;

pub struct App<V: GridView> {
    model: GridModel,
    view: V,
    keymap: Keymap,
}

impl<V: GridView> App<V> {
    /// `view` is expected to already reflect `model`
    pub fn new(model: GridModel, view: V, keymap: Keymap) -> Self {
        Self {
            model,
            view,
            keymap,
        }
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Extract current context from the model for keybinding evaluation
    pub fn key_context(&self) -> KeyContext {
        KeyContext::from_model(&self.model)
    }

    /// The command bound to `keystroke` in the current context
    pub fn command_for(&self, keystroke: &Keystroke) -> Option<Command> {
        let context = self.key_context();
        self.keymap.lookup_with_context(keystroke, Some(&context))
    }

    /// Resolve and run a keystroke; unbound keys do nothing
    pub fn handle_keystroke(&mut self, keystroke: Keystroke) -> Option<Cmd> {
        let command = self.command_for(&keystroke)?;
        tracing::trace!(key = %keystroke, ?command, "Key dispatched");
        self.dispatch_command(command)
    }

    /// Dispatch a command through the update loop
    pub fn dispatch_command(&mut self, command: Command) -> Option<Cmd> {
        let mut result = None;
        for msg in command.to_msgs() {
            result = self.dispatch(msg).or(result);
        }
        result
    }

    /// Run a single message through the update loop
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        update(&mut self.model, &mut self.view, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{default_bindings, KeyCode, Modifiers};
    use crate::view::RecordingView;

    fn app() -> App<RecordingView> {
        App::new(
            GridModel::new(4, 2, Vec::new()).unwrap(),
            RecordingView::new(),
            Keymap::with_bindings(default_bindings()),
        )
    }

    #[test]
    fn test_arrow_moves_cursor() {
        let mut app = app();
        let cmd = app.handle_keystroke(Keystroke::key(KeyCode::Right));
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(app.model().cursor().x, 1);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = app();
        assert_eq!(app.handle_keystroke(Keystroke::char('z')), None);
        assert!(app.view().notifications.is_empty());
    }

    #[test]
    fn test_quit_depends_on_mode() {
        let mut app = app();
        app.handle_keystroke(Keystroke::key(KeyCode::Enter));
        assert!(app.model().is_editing());

        // Plain q is text while editing
        assert_eq!(app.handle_keystroke(Keystroke::char('q')), None);
        assert_eq!(
            app.handle_keystroke(Keystroke::new(KeyCode::Char('q'), Modifiers::CTRL)),
            Some(Cmd::Quit)
        );
    }
}
