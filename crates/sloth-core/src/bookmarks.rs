//! Bookmarks
//!
//! Session-only store keyed by URL, the bookmarks dialog, and the notices
//! shown after a bookmark attempt.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Saved pages, unique by URL, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, title: impl Into<String>, url: impl Into<String>) -> AddOutcome {
        let url = url.into();
        if self.bookmarks.iter().any(|b| b.url == url) {
            return AddOutcome::AlreadyExists;
        }

        let title = title.into();
        tracing::info!(url = %url, title = %title, "Added bookmark");
        self.bookmarks.push(Bookmark { title, url });
        AddOutcome::Added
    }

    pub fn list(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// First bookmark with this title.
    ///
    /// Titles are not unique; when several match, the oldest wins and a
    /// warning is logged.
    pub fn resolve(&self, title: &str) -> Option<&Bookmark> {
        let mut matches = self.bookmarks.iter().filter(|b| b.title == title);
        let first = matches.next()?;
        let others = matches.count();
        if others > 0 {
            tracing::warn!(
                title = %title,
                url = %first.url,
                others,
                "Ambiguous bookmark title, using the oldest"
            );
        }
        Some(first)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

/// Selection dialog over a snapshot of the bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkDialog {
    pub rows: Vec<Bookmark>,
    pub selected: Option<usize>,
}

impl BookmarkDialog {
    pub fn new(store: &BookmarkStore) -> Self {
        Self {
            rows: store.list().to_vec(),
            selected: None,
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.rows.iter().map(|b| b.title.as_str()).collect()
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(CoreError::UnknownBookmark(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn selection(&self) -> Option<&Bookmark> {
        self.selected.and_then(|i| self.rows.get(i))
    }
}

/// Informational message box contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn for_bookmark(outcome: AddOutcome) -> Self {
        match outcome {
            AddOutcome::Added => Self {
                title: "Bookmark Added".to_string(),
                message: "Bookmark has been added.".to_string(),
            },
            AddOutcome::AlreadyExists => Self {
                title: "Bookmark Exists!".to_string(),
                message: "Bookmark already exists try adding another page instead.".to_string(),
            },
        }
    }
}
