//! History panel commands

use serde::Serialize;
use sloth_core::{HistoryEntry, TabId};

use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryPanelInfo {
    pub visible: bool,
    pub rows: Vec<HistoryEntry>,
}

fn panel_info(state: &AppState) -> HistoryPanelInfo {
    let panel = state.browser().history_panel();
    HistoryPanelInfo {
        visible: panel.is_visible(),
        rows: if panel.is_visible() {
            panel.rows().to_vec()
        } else {
            Vec::new()
        },
    }
}

pub fn toggle_history(state: &mut AppState) -> CommandResult<HistoryPanelInfo> {
    match state.with_browser(|browser| Ok(browser.toggle_history())) {
        Ok(_) => CommandResult::ok(panel_info(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_history(state: &AppState) -> CommandResult<Vec<HistoryEntry>> {
    CommandResult::ok(state.browser().history().to_vec())
}

pub fn open_history_entry(state: &mut AppState, row: usize) -> CommandResult<TabId> {
    state
        .with_browser(|browser| browser.open_history_entry(row))
        .into()
}
