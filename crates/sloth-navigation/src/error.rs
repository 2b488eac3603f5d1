//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("No history row at index {0}")]
    HistoryIndex(usize),

    #[error("History panel is not open")]
    PanelHidden,
}
