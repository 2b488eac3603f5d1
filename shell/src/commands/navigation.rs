//! Address bar, toolbar and window chrome commands

use serde::Serialize;
use sloth_core::{Notice, UrlBar};

use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitInfo {
    /// URL handed to the renderer, `None` for blank input
    pub requested: Option<String>,
    pub url_bar: UrlBar,
}

pub fn submit_url(state: &mut AppState, text: String) -> CommandResult<SubmitInfo> {
    let requested = match state.with_browser(|browser| Ok(browser.submit_url_bar_text(&text))) {
        Ok(requested) => requested,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    CommandResult::ok(SubmitInfo {
        requested,
        url_bar: state.browser().url_bar().clone(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toolbar {
    Back,
    Forward,
    Reload,
}

pub fn toolbar(state: &mut AppState, button: Toolbar) -> CommandResult<UrlBar> {
    let result = state.with_browser(|browser| {
        match button {
            Toolbar::Back => browser.go_back(),
            Toolbar::Forward => browser.go_forward(),
            Toolbar::Reload => browser.reload(),
        }
        Ok(())
    });

    match result {
        Ok(()) => CommandResult::ok(state.browser().url_bar().clone()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_url_bar(state: &AppState) -> CommandResult<UrlBar> {
    CommandResult::ok(state.browser().url_bar().clone())
}

pub fn get_window_title(state: &AppState) -> CommandResult<String> {
    CommandResult::ok(state.browser().window_title().to_string())
}

#[derive(Debug, Serialize)]
pub struct KeyChordInfo {
    pub handled: bool,
    pub notice: Option<Notice>,
}

pub fn key_chord(state: &mut AppState, chord: String) -> CommandResult<KeyChordInfo> {
    state
        .with_browser(|browser| match browser.handle_key_chord(&chord) {
            Some(result) => Ok(KeyChordInfo {
                handled: true,
                notice: result?,
            }),
            None => Ok(KeyChordInfo {
                handled: false,
                notice: None,
            }),
        })
        .into()
}
