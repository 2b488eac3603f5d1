//! Sloth Navigation
//!
//! - Address bar input resolution: text without a scheme gets the default
//!   scheme (`https`) prefixed; anything else goes to the renderer as typed.
//! - History: append-only log of finished page loads across all tabs, plus
//!   the visibility state of the history panel.

mod error;
mod history;
mod input;

pub use error::NavigationError;
pub use history::{HistoryEntry, HistoryLog, HistoryPanel};
pub use input::{InputResolver, UrlBar};

pub type Result<T> = std::result::Result<T, NavigationError>;
