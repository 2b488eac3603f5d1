//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] sloth_tabs::TabError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] sloth_navigation::NavigationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No shortcut at index {0}")]
    UnknownShortcut(usize),

    #[error("No bookmark at index {0}")]
    UnknownBookmark(usize),

    #[error("No bookmark titled {0:?}")]
    BookmarkNotFound(String),

    #[error("Bookmarks dialog is not open")]
    DialogClosed,

    #[error("No active tab")]
    NoActiveTab,
}
