//! Side panel shortcuts, toolbar actions and key bindings

use serde::{Deserialize, Serialize};

/// A fixed destination in the side panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub label: String,
    /// Host to open, without scheme
    pub site: String,
}

impl Shortcut {
    pub fn new(label: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            site: site.into(),
        }
    }

    pub fn url(&self) -> String {
        format!("https://{}", self.site)
    }
}

pub fn default_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Twitter", "twitter.com"),
        Shortcut::new("Gmail", "gmail.com"),
        Shortcut::new("YouTube", "youtube.com"),
    ]
}

/// Everything a toolbar button, side panel button or key binding can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "index", rename_all = "snake_case")]
pub enum Action {
    Back,
    Forward,
    Reload,
    BookmarkCurrentPage,
    OpenBookmarksDialog,
    ToggleHistory,
    OpenShortcut(usize),
    NewTab,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub chord: String,
    pub action: Action,
}

impl KeyBinding {
    pub fn new(chord: impl Into<String>, action: Action) -> Self {
        Self {
            chord: chord.into(),
            action,
        }
    }

    /// Case- and whitespace-insensitive chord comparison
    pub fn matches(&self, chord: &str) -> bool {
        normalize_chord(&self.chord) == normalize_chord(chord)
    }
}

fn normalize_chord(chord: &str) -> Vec<String> {
    chord
        .split('+')
        .map(|part| part.trim().to_ascii_lowercase())
        .filter(|part| !part.is_empty())
        .collect()
}

pub fn default_key_bindings() -> Vec<KeyBinding> {
    vec![KeyBinding::new("Ctrl+H", Action::ToggleHistory)]
}
