//! Context system for conditional keybindings
//!
//! Enables bindings that only activate in one edit mode, such as
//! "q quits, but only while browsing".

use serde::Deserialize;

use crate::model::GridModel;

/// Context extracted from the grid model for keybinding evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// Whether the cursor cell is being edited
    pub editing: bool,
}

impl KeyContext {
    pub fn from_model(model: &GridModel) -> Self {
        Self {
            editing: model.is_editing(),
        }
    }

    pub fn browsing() -> Self {
        Self { editing: false }
    }

    pub fn editing() -> Self {
        Self { editing: true }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Binding only active while a cell is being edited
    Editing,
    /// Binding only active while browsing
    Browsing,
}

impl Condition {
    /// Evaluate this condition against the current context
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::Editing => ctx.editing,
            Condition::Browsing => !ctx.editing,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_is_browsing() {
        assert_eq!(KeyContext::default(), KeyContext::browsing());
    }

    #[test]
    fn test_conditions() {
        let browsing = KeyContext::browsing();
        let editing = KeyContext::editing();

        assert!(Condition::Browsing.evaluate(&browsing));
        assert!(!Condition::Editing.evaluate(&browsing));
        assert!(Condition::Editing.evaluate(&editing));
        assert!(!Condition::Browsing.evaluate(&editing));
    }

    #[test]
    fn test_evaluate_all_empty() {
        assert!(Condition::evaluate_all(&[], &KeyContext::default()));
    }

    #[test]
    fn test_evaluate_all_and_logic() {
        let conditions = [Condition::Editing, Condition::Browsing];
        assert!(!Condition::evaluate_all(&conditions, &KeyContext::editing()));
        assert!(!Condition::evaluate_all(&conditions, &KeyContext::browsing()));
    }
}
