//! Tab data structure
//!
//! A tab is the browsing state behind one entry in the tab strip:
//! - Label shown in the strip (page title once loaded)
//! - Last URL the renderer reported
//! - Loading indicator
//! - The renderer itself

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::renderer::Renderer;
use crate::state::LoadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TabId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

pub struct Tab {
    /// Unique identifier
    pub id: TabId,
    /// Text shown in the tab strip
    pub label: String,
    /// Last URL reported by the renderer (or requested, before it reports)
    pub url: String,
    pub load_state: LoadState,
    renderer: Box<dyn Renderer>,
}

impl Tab {
    pub fn new(id: TabId, label: String, renderer: Box<dyn Renderer>) -> Self {
        Self {
            id,
            label,
            url: String::new(),
            load_state: LoadState::Loading,
            renderer,
        }
    }

    pub fn load(&mut self, url: &str) {
        tracing::debug!(tab_id = %self.id, url = %url, "Loading");
        self.url = url.to_string();
        self.load_state = LoadState::Loading;
        self.renderer.load(url);
    }

    pub fn go_back(&mut self) {
        self.load_state = LoadState::Loading;
        self.renderer.go_back();
    }

    pub fn go_forward(&mut self) {
        self.load_state = LoadState::Loading;
        self.renderer.go_forward();
    }

    pub fn reload(&mut self) {
        self.load_state = LoadState::Loading;
        self.renderer.reload();
    }

    /// Record a URL change reported by the renderer.
    ///
    /// In-page navigations report a new URL without a load, so the load
    /// state is left alone.
    pub fn record_url(&mut self, url: String) {
        self.url = url;
    }

    /// Mark the current load complete and adopt the page title as label
    pub fn finish_load(&mut self) -> (String, String) {
        let title = self.renderer.current_title();
        let url = self.renderer.current_url();

        self.label = title.clone();
        self.url = url.clone();
        self.load_state = LoadState::Idle;

        (title, url)
    }

    pub fn current_url(&self) -> String {
        self.renderer.current_url()
    }

    pub fn current_title(&self) -> String {
        self.renderer.current_title()
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    pub fn info(&self, is_active: bool) -> TabInfo {
        TabInfo {
            id: self.id,
            label: self.label.clone(),
            url: self.url.clone(),
            is_active,
            is_loading: self.is_loading(),
        }
    }
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("url", &self.url)
            .field("load_state", &self.load_state)
            .finish_non_exhaustive()
    }
}

/// What the tab strip needs to draw one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub label: String,
    pub url: String,
    pub is_active: bool,
    pub is_loading: bool,
}
