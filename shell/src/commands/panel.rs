//! Side panel commands

use sloth_core::{Shortcut, TabId};

use super::tabs::CommandResult;
use crate::state::AppState;

pub fn get_shortcuts(state: &AppState) -> CommandResult<Vec<Shortcut>> {
    CommandResult::ok(state.browser().shortcuts().to_vec())
}

pub fn open_shortcut(state: &mut AppState, index: usize) -> CommandResult<TabId> {
    state
        .with_browser(|browser| browser.open_shortcut(index))
        .into()
}
