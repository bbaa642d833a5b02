//! Keybinding struct representing a mapping from a keystroke to a command

use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// A single keybinding mapping a keystroke to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// Conditions that must be true for this binding to activate
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    /// Add a single condition to this binding
    pub fn when_single(mut self, condition: Condition) -> Self {
        self.when = Some(vec![condition]);
        self
    }

    pub fn is_conditional(&self) -> bool {
        self.when.is_some()
    }

    /// Whether this binding is active in `ctx` (unconditional bindings always are)
    pub fn is_active(&self, ctx: &KeyContext) -> bool {
        self.when
            .as_deref()
            .map_or(true, |conds| Condition::evaluate_all(conds, ctx))
    }

    pub fn display_string(&self) -> String {
        self.keystroke.display_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::KeyCode;

    #[test]
    fn test_unconditional_binding_always_active() {
        let binding = Keybinding::new(Keystroke::key(KeyCode::Enter), Command::EnterOrCommitEdit);
        assert!(!binding.is_conditional());
        assert!(binding.is_active(&KeyContext::browsing()));
        assert!(binding.is_active(&KeyContext::editing()));
    }

    #[test]
    fn test_conditional_binding() {
        let binding = Keybinding::new(Keystroke::char('q'), Command::Quit)
            .when_single(Condition::Browsing);
        assert!(binding.is_conditional());
        assert!(binding.is_active(&KeyContext::browsing()));
        assert!(!binding.is_active(&KeyContext::editing()));
    }
}
