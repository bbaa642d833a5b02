//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effect requested by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Redraw the grid
    Redraw,
    /// Leave the run loop
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(self) -> bool {
        // Quit doesn't need redraw - app is exiting
        matches!(self, Cmd::Redraw)
    }

    /// Check if this command asks the app to exit
    pub fn is_quit(self) -> bool {
        matches!(self, Cmd::Quit)
    }
}
