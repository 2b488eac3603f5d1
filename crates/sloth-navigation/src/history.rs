//! History management
//!
//! Every finished page load in any tab is appended; nothing is merged,
//! removed, or persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub url: String,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            visited_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        tracing::debug!(url = %entry.url, title = %entry.title, "Recorded visit");
        self.entries.push(entry);
    }

    /// Oldest first
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The dockable history list.
///
/// Rows are a snapshot of the log taken each time the panel is shown, so
/// what the user picks from matches what they see.
#[derive(Debug, Clone, Default)]
pub struct HistoryPanel {
    visible: bool,
    rows: Vec<HistoryEntry>,
}

impl HistoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, log: &HistoryLog) {
        if !self.visible {
            self.visible = true;
            self.rows = log.list().to_vec();
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Returns the new visibility
    pub fn toggle(&mut self, log: &HistoryLog) -> bool {
        if self.visible {
            self.hide();
        } else {
            self.show(log);
        }
        self.visible
    }

    pub fn rows(&self) -> &[HistoryEntry] {
        &self.rows
    }

    /// A row the user can see. Rows of a hidden panel are stale.
    pub fn row(&self, index: usize) -> Result<&HistoryEntry> {
        if !self.visible {
            return Err(NavigationError::PanelHidden);
        }
        self.rows
            .get(index)
            .ok_or(NavigationError::HistoryIndex(index))
    }
}
