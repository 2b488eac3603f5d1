//! Tab management commands
use serde::{Deserialize, Serialize};
use sloth_core::{Browser, Result, TabId, TabInfo};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<Result<T>> for CommandResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => CommandResult::ok(data),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}

/// A tab named by id, or by its position in the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TabRef {
    Id(TabId),
    Index(usize),
}

fn resolve_tab(browser: &Browser, tab: TabRef) -> Result<TabId> {
    match tab {
        TabRef::Id(id) => Ok(id),
        TabRef::Index(index) => browser
            .tabs()
            .get(index)
            .map(|t| t.id)
            .ok_or_else(|| sloth_core::TabError::IndexOutOfRange(index).into()),
    }
}

pub fn get_tabs(state: &AppState) -> CommandResult<Vec<TabInfo>> {
    CommandResult::ok(state.browser().tabs())
}

pub fn get_active_tab(state: &AppState) -> CommandResult<Option<TabInfo>> {
    CommandResult::ok(state.browser().active_tab())
}

pub fn open_tab(
    state: &mut AppState,
    url: Option<String>,
    label: Option<String>,
) -> CommandResult<TabInfo> {
    state
        .with_browser(|browser| {
            browser.open_tab(url.as_deref(), label.as_deref());
            active_info(browser)
        })
        .into()
}

#[derive(Debug, Serialize)]
pub struct CloseInfo {
    pub closed: bool,
    pub tab_count: usize,
}

pub fn close_tab(state: &mut AppState, tab: TabRef) -> CommandResult<CloseInfo> {
    state
        .with_browser(|browser| {
            let id = resolve_tab(browser, tab)?;
            let closed = browser.close_tab(id)?;
            Ok(CloseInfo {
                closed,
                tab_count: browser.tab_count(),
            })
        })
        .into()
}

pub fn activate_tab(state: &mut AppState, tab: TabRef) -> CommandResult<TabInfo> {
    state
        .with_browser(|browser| {
            let id = resolve_tab(browser, tab)?;
            browser.set_active(id)?;
            active_info(browser)
        })
        .into()
}

pub fn tab_bar_double_clicked(
    state: &mut AppState,
    index: Option<usize>,
) -> CommandResult<Option<TabId>> {
    state
        .with_browser(|browser| Ok(browser.on_tab_bar_double_clicked(index)))
        .into()
}

pub(crate) fn active_info(browser: &Browser) -> Result<TabInfo> {
    browser
        .active_tab()
        .ok_or(sloth_core::CoreError::NoActiveTab)
}
