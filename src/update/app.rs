//! App update functions

use crate::commands::Cmd;
use crate::messages::AppMsg;

/// Handle app messages
pub fn update_app(msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Quit => {
            tracing::info!("Quit requested");
            Some(Cmd::Quit)
        }
    }
}
