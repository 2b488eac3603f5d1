//! Bookmark commands

use sloth_core::{Bookmark, BookmarkDialog, CoreError, Notice, TabId};

use super::tabs::CommandResult;
use crate::state::AppState;

pub fn bookmark_current_page(state: &mut AppState) -> CommandResult<Notice> {
    state
        .with_browser(|browser| browser.bookmark_current_page().ok_or(CoreError::NoActiveTab))
        .into()
}

pub fn get_bookmarks(state: &AppState) -> CommandResult<Vec<Bookmark>> {
    CommandResult::ok(state.browser().bookmarks().to_vec())
}

pub fn open_bookmarks_dialog(state: &mut AppState) -> CommandResult<BookmarkDialog> {
    state
        .with_browser(|browser| Ok(browser.open_bookmarks_dialog().clone()))
        .into()
}

pub fn select_bookmark(state: &mut AppState, index: usize) -> CommandResult<BookmarkDialog> {
    state
        .with_browser(|browser| {
            browser.select_bookmark(index)?;
            browser.bookmark_dialog().cloned().ok_or(CoreError::DialogClosed)
        })
        .into()
}

pub fn accept_bookmarks_dialog(state: &mut AppState) -> CommandResult<Option<TabId>> {
    state
        .with_browser(|browser| browser.accept_bookmarks_dialog())
        .into()
}

pub fn cancel_bookmarks_dialog(state: &mut AppState) -> CommandResult<()> {
    state
        .with_browser(|browser| {
            browser.cancel_bookmarks_dialog();
            Ok(())
        })
        .into()
}

pub fn open_bookmark(state: &mut AppState, title: String) -> CommandResult<TabId> {
    state
        .with_browser(|browser| {
            browser
                .open_bookmark(&title)
                .ok_or_else(|| CoreError::BookmarkNotFound(title.clone()))
        })
        .into()
}
