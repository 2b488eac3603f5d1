//! Sloth Core
//!
//! Central coordination layer for the Sloth browser.
//! The host window system and the embedded web view stay outside; this
//! crate owns every piece of state between them.

mod bookmarks;
mod browser;
mod config;
mod error;
mod shortcuts;

pub use bookmarks::{AddOutcome, Bookmark, BookmarkDialog, BookmarkStore, Notice};
pub use browser::Browser;
pub use config::{Config, CONFIG_ENV};
pub use error::CoreError;
pub use shortcuts::{default_key_bindings, default_shortcuts, Action, KeyBinding, Shortcut};

// Re-export core components
pub use sloth_navigation::{
    HistoryEntry, HistoryLog, HistoryPanel, InputResolver, NavigationError, UrlBar,
};
pub use sloth_tabs::{
    LoadState, Renderer, RendererEvent, RendererEvents, RendererFactory, TabError, TabId,
    TabInfo,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Logs go to stderr so stdout stays free for the host.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
