//! Shell commands
//!
//! One JSON request per line in, one `CommandResult` per line out.
//! Requests are tagged by `cmd`, e.g. `{"cmd": "submit_url", "text": "example.com"}`.

pub mod bookmarks;
pub mod history;
pub mod navigation;
pub mod panel;
pub mod tabs;

use serde::Deserialize;

use crate::state::AppState;
use navigation::Toolbar;
use tabs::{CommandResult, TabRef};

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    // Tabs
    GetTabs,
    GetActiveTab,
    OpenTab {
        url: Option<String>,
        label: Option<String>,
    },
    CloseTab {
        tab: TabRef,
    },
    ActivateTab {
        tab: TabRef,
    },
    TabBarDoubleClicked {
        index: Option<usize>,
    },
    // Navigation
    SubmitUrl {
        text: String,
    },
    Back,
    Forward,
    Reload,
    GetUrlBar,
    GetWindowTitle,
    KeyChord {
        chord: String,
    },
    // Bookmarks
    BookmarkCurrentPage,
    GetBookmarks,
    OpenBookmarksDialog,
    SelectBookmark {
        index: usize,
    },
    AcceptBookmarksDialog,
    CancelBookmarksDialog,
    OpenBookmark {
        title: String,
    },
    // History
    ToggleHistory,
    GetHistory,
    OpenHistoryEntry {
        row: usize,
    },
    // Side panel
    GetShortcuts,
    OpenShortcut {
        index: usize,
    },
}

/// Parse one request line, run it, and render the response line.
pub fn handle_line(state: &mut AppState, line: &str) -> serde_json::Result<String> {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(state, request),
        Err(e) => {
            tracing::warn!(error = %e, "Rejected request");
            serde_json::to_string(&CommandResult::<()>::err(format!("Invalid request: {e}")))
        }
    }
}

pub fn dispatch(state: &mut AppState, request: Request) -> serde_json::Result<String> {
    tracing::debug!(?request, "Dispatching");

    match request {
        Request::GetTabs => serde_json::to_string(&tabs::get_tabs(state)),
        Request::GetActiveTab => serde_json::to_string(&tabs::get_active_tab(state)),
        Request::OpenTab { url, label } => {
            serde_json::to_string(&tabs::open_tab(state, url, label))
        }
        Request::CloseTab { tab } => serde_json::to_string(&tabs::close_tab(state, tab)),
        Request::ActivateTab { tab } => serde_json::to_string(&tabs::activate_tab(state, tab)),
        Request::TabBarDoubleClicked { index } => {
            serde_json::to_string(&tabs::tab_bar_double_clicked(state, index))
        }
        Request::SubmitUrl { text } => serde_json::to_string(&navigation::submit_url(state, text)),
        Request::Back => serde_json::to_string(&navigation::toolbar(state, Toolbar::Back)),
        Request::Forward => serde_json::to_string(&navigation::toolbar(state, Toolbar::Forward)),
        Request::Reload => serde_json::to_string(&navigation::toolbar(state, Toolbar::Reload)),
        Request::GetUrlBar => serde_json::to_string(&navigation::get_url_bar(state)),
        Request::GetWindowTitle => serde_json::to_string(&navigation::get_window_title(state)),
        Request::KeyChord { chord } => serde_json::to_string(&navigation::key_chord(state, chord)),
        Request::BookmarkCurrentPage => {
            serde_json::to_string(&bookmarks::bookmark_current_page(state))
        }
        Request::GetBookmarks => serde_json::to_string(&bookmarks::get_bookmarks(state)),
        Request::OpenBookmarksDialog => {
            serde_json::to_string(&bookmarks::open_bookmarks_dialog(state))
        }
        Request::SelectBookmark { index } => {
            serde_json::to_string(&bookmarks::select_bookmark(state, index))
        }
        Request::AcceptBookmarksDialog => {
            serde_json::to_string(&bookmarks::accept_bookmarks_dialog(state))
        }
        Request::CancelBookmarksDialog => {
            serde_json::to_string(&bookmarks::cancel_bookmarks_dialog(state))
        }
        Request::OpenBookmark { title } => {
            serde_json::to_string(&bookmarks::open_bookmark(state, title))
        }
        Request::ToggleHistory => serde_json::to_string(&history::toggle_history(state)),
        Request::GetHistory => serde_json::to_string(&history::get_history(state)),
        Request::OpenHistoryEntry { row } => {
            serde_json::to_string(&history::open_history_entry(state, row))
        }
        Request::GetShortcuts => serde_json::to_string(&panel::get_shortcuts(state)),
        Request::OpenShortcut { index } => {
            serde_json::to_string(&panel::open_shortcut(state, index))
        }
    }
}
