//! gridpad - a keyboard-driven grid of editable cells
//!
//! The grid model lives in [`model`]; every visible effect goes through the
//! [`view::GridView`] trait. Key events become [`messages::Msg`] values via
//! the [`keymap`], and [`update::update`] applies them in the Elm style.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod tui;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use app::App;
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::GridModel;
pub use theme::Theme;
