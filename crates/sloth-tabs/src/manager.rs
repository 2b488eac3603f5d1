//! Tab Manager
//!
//! Ordered collection of open tabs plus the active-tab pointer.
//! Once a tab exists there is always at least one: closing the last tab is
//! ignored.

use crate::error::TabError;
use crate::renderer::{NotificationSender, RendererFactory};
use crate::tab::{Tab, TabId, TabInfo};
use crate::Result;

pub struct TabManager {
    /// Tabs in strip order
    tabs: Vec<Tab>,
    /// Currently active tab
    active: Option<TabId>,
    factory: Box<dyn RendererFactory>,
    events: NotificationSender,
    new_tab_url: String,
    new_tab_label: String,
}

impl TabManager {
    pub fn new(factory: impl RendererFactory + 'static, events: NotificationSender) -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            factory: Box::new(factory),
            events,
            new_tab_url: "https://google.com".to_string(),
            new_tab_label: "Blank".to_string(),
        }
    }

    /// URL and label used when `open_tab` is called without them
    pub fn with_defaults(mut self, url: impl Into<String>, label: impl Into<String>) -> Self {
        self.new_tab_url = url.into();
        self.new_tab_label = label.into();
        self
    }

    /// Open a tab, point its renderer at `url`, and make it active
    pub fn open_tab(&mut self, url: Option<&str>, label: Option<&str>) -> TabId {
        let id = TabId::new();
        let url = url.unwrap_or(self.new_tab_url.as_str()).to_string();
        let label = label.unwrap_or(self.new_tab_label.as_str()).to_string();

        let renderer = self.factory.create(self.events.events_for(id));
        let mut tab = Tab::new(id, label, renderer);
        tab.load(&url);

        self.tabs.push(tab);
        self.active = Some(id);

        tracing::info!(tab_id = %id, url = %url, "Opened tab");

        id
    }

    /// Close a tab.
    ///
    /// Returns the removed tab, or `None` when it was the only one left.
    pub fn close_tab(&mut self, tab_id: TabId) -> Result<Option<Tab>> {
        let index = self.position(tab_id).ok_or(TabError::NotFound(tab_id))?;

        if self.tabs.len() < 2 {
            tracing::debug!(tab_id = %tab_id, "Ignoring close of last tab");
            return Ok(None);
        }

        let tab = self.tabs.remove(index);

        if self.active == Some(tab_id) {
            let next = index.min(self.tabs.len() - 1);
            self.active = self.tabs.get(next).map(|t| t.id);
        }

        tracing::info!(tab_id = %tab_id, "Closed tab");

        Ok(Some(tab))
    }

    pub fn set_active(&mut self, tab_id: TabId) -> Result<()> {
        if !self.contains(tab_id) {
            return Err(TabError::NotFound(tab_id));
        }
        self.active = Some(tab_id);
        Ok(())
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active
    }

    pub fn is_active(&self, tab_id: TabId) -> bool {
        self.active == Some(tab_id)
    }

    pub fn active(&self) -> Option<&Tab> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active?;
        self.get_mut(id)
    }

    pub fn get(&self, tab_id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub fn get_mut(&mut self, tab_id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }

    pub fn contains(&self, tab_id: TabId) -> bool {
        self.position(tab_id).is_some()
    }

    pub fn position(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    pub fn id_at(&self, index: usize) -> Result<TabId> {
        self.tabs
            .get(index)
            .map(|t| t.id)
            .ok_or(TabError::IndexOutOfRange(index))
    }

    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tab strip view model, in display order
    pub fn tabs(&self) -> Vec<TabInfo> {
        self.tabs
            .iter()
            .map(|t| t.info(self.is_active(t.id)))
            .collect()
    }
}
