//! Main browser state container
//!
//! Owns the tabs, history, bookmarks and the chrome around them (address
//! bar, window title, history panel, bookmarks dialog). Everything runs on
//! the host's dispatch thread: user input calls into `Browser` directly,
//! renderer notifications are queued and applied by [`Browser::pump_notifications`].

use sloth_navigation::{HistoryEntry, HistoryLog, HistoryPanel, InputResolver, UrlBar};
use sloth_tabs::{
    notification_channel, NotificationQueue, RendererEvent, RendererFactory, TabId, TabInfo,
    TabManager,
};

use crate::bookmarks::{AddOutcome, Bookmark, BookmarkDialog, BookmarkStore, Notice};
use crate::config::Config;
use crate::error::CoreError;
use crate::shortcuts::{default_key_bindings, Action, KeyBinding, Shortcut};
use crate::Result;

pub struct Browser {
    /// Configuration
    config: Config,
    /// Open tabs and the active pointer
    tabs: TabManager,
    /// Renderer notifications waiting to be applied
    notifications: NotificationQueue,
    /// Address bar input resolution
    input_resolver: InputResolver,
    history: HistoryLog,
    history_panel: HistoryPanel,
    bookmarks: BookmarkStore,
    /// Open bookmarks dialog, if any
    bookmark_dialog: Option<BookmarkDialog>,
    url_bar: UrlBar,
    window_title: String,
    key_bindings: Vec<KeyBinding>,
}

impl Browser {
    /// Create the browser and open the homepage tab
    pub fn new(config: Config, factory: impl RendererFactory + 'static) -> Self {
        let (sender, notifications) = notification_channel();
        let tabs = TabManager::new(factory, sender)
            .with_defaults(config.new_tab_url.clone(), config.new_tab_label.clone());

        let mut browser = Self {
            input_resolver: InputResolver::with_default_scheme(config.default_scheme.clone()),
            window_title: config.window_title.clone(),
            config,
            tabs,
            notifications,
            history: HistoryLog::new(),
            history_panel: HistoryPanel::new(),
            bookmarks: BookmarkStore::new(),
            bookmark_dialog: None,
            url_bar: UrlBar::default(),
            key_bindings: default_key_bindings(),
        };

        let homepage = browser.config.homepage.clone();
        let label = browser.config.homepage_label.clone();
        browser.open_tab(Some(&homepage), Some(&label));

        tracing::info!("Browser initialized");

        browser
    }

    // === Tab operations ===

    /// Open a tab and bring it to the front
    pub fn open_tab(&mut self, url: Option<&str>, label: Option<&str>) -> TabId {
        let id = self.tabs.open_tab(url, label);
        self.refresh_from_active();
        id
    }

    /// Close a tab. Returns false when it was the last one and stayed open.
    pub fn close_tab(&mut self, tab_id: TabId) -> Result<bool> {
        let was_active = self.tabs.is_active(tab_id);
        let closed = self.tabs.close_tab(tab_id)?.is_some();

        if closed && was_active {
            self.refresh_from_active();
        }

        Ok(closed)
    }

    pub fn close_tab_at(&mut self, index: usize) -> Result<bool> {
        let id = self.tabs.id_at(index)?;
        self.close_tab(id)
    }

    pub fn set_active(&mut self, tab_id: TabId) -> Result<()> {
        self.tabs.set_active(tab_id)?;
        self.refresh_from_active();
        Ok(())
    }

    pub fn set_active_at(&mut self, index: usize) -> Result<()> {
        let id = self.tabs.id_at(index)?;
        self.set_active(id)
    }

    /// Double-click on the tab strip. Only empty space (`None`) opens a tab.
    pub fn on_tab_bar_double_clicked(&mut self, index: Option<usize>) -> Option<TabId> {
        match index {
            None => Some(self.open_tab(None, None)),
            Some(_) => None,
        }
    }

    pub fn tabs(&self) -> Vec<TabInfo> {
        self.tabs.tabs()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.tabs.active_id()
    }

    pub fn active_tab(&self) -> Option<TabInfo> {
        self.tabs.active().map(|tab| tab.info(true))
    }

    // === Navigation operations ===

    /// Load address bar text in the active tab. Returns the URL requested.
    pub fn submit_url_bar_text(&mut self, text: &str) -> Option<String> {
        self.url_bar.edit(text);

        let url = self.input_resolver.resolve(text)?;
        let tab = self.tabs.active_mut()?;
        tab.load(&url);
        Some(url)
    }

    pub fn go_back(&mut self) {
        if let Some(tab) = self.tabs.active_mut() {
            tab.go_back();
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(tab) = self.tabs.active_mut() {
            tab.go_forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(tab) = self.tabs.active_mut() {
            tab.reload();
        }
    }

    /// Apply every queued renderer notification. Returns how many were taken.
    pub fn pump_notifications(&mut self) -> usize {
        let pending = self.notifications.drain();
        let count = pending.len();

        for notification in pending {
            match notification.event {
                RendererEvent::UrlChanged(url) => {
                    self.on_renderer_url_changed(notification.tab_id, &url);
                }
                RendererEvent::LoadFinished => {
                    self.on_renderer_load_finished(notification.tab_id);
                }
            }
        }

        count
    }

    /// A renderer moved to a new URL. Only the active tab drives the address bar.
    ///
    /// Returns false if the tab is gone.
    pub fn on_renderer_url_changed(&mut self, tab_id: TabId, url: &str) -> bool {
        let is_active = self.tabs.is_active(tab_id);
        let Some(tab) = self.tabs.get_mut(tab_id) else {
            tracing::debug!(tab_id = %tab_id, url = %url, "Ignoring URL change from closed tab");
            return false;
        };

        tab.record_url(url.to_string());

        if is_active {
            self.url_bar.set_text(url);
        }

        true
    }

    /// A renderer finished loading. Recorded in history whether or not the
    /// tab is in front; only the active tab drives the window title.
    ///
    /// Returns false if the tab is gone.
    pub fn on_renderer_load_finished(&mut self, tab_id: TabId) -> bool {
        let is_active = self.tabs.is_active(tab_id);
        let Some(tab) = self.tabs.get_mut(tab_id) else {
            tracing::debug!(tab_id = %tab_id, "Ignoring load finished from closed tab");
            return false;
        };

        let (title, url) = tab.finish_load();
        tracing::debug!(tab_id = %tab_id, url = %url, is_active, "Load finished");

        self.history.append(HistoryEntry::new(title.clone(), url));

        if is_active {
            self.set_window_title(title);
        }

        true
    }

    pub fn url_bar(&self) -> &UrlBar {
        &self.url_bar
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    fn refresh_from_active(&mut self) {
        let Some(tab) = self.tabs.active() else {
            return;
        };
        let url = tab.current_url();
        let title = tab.current_title();

        self.url_bar.set_text(url);
        self.set_window_title(title);
    }

    fn set_window_title(&mut self, title: String) {
        self.window_title = if title.trim().is_empty() {
            self.config.window_title.clone()
        } else {
            title
        };
    }

    // === Bookmark operations ===

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.list()
    }

    pub fn add_bookmark(&mut self, title: &str, url: &str) -> AddOutcome {
        self.bookmarks.add(title, url)
    }

    /// Bookmark the active page; the notice is for the user either way
    pub fn bookmark_current_page(&mut self) -> Option<Notice> {
        let tab = self.tabs.active()?;
        let title = tab.current_title();
        let url = tab.current_url();

        let outcome = self.bookmarks.add(title, url);
        Some(Notice::for_bookmark(outcome))
    }

    pub fn open_bookmarks_dialog(&mut self) -> &BookmarkDialog {
        self.bookmark_dialog
            .insert(BookmarkDialog::new(&self.bookmarks))
    }

    pub fn bookmark_dialog(&self) -> Option<&BookmarkDialog> {
        self.bookmark_dialog.as_ref()
    }

    pub fn select_bookmark(&mut self, index: usize) -> Result<()> {
        self.bookmark_dialog
            .as_mut()
            .ok_or(CoreError::DialogClosed)?
            .select(index)
    }

    /// OK pressed: open the selected row in a new tab. Nothing selected → no tab.
    pub fn accept_bookmarks_dialog(&mut self) -> Result<Option<TabId>> {
        let dialog = self.bookmark_dialog.take().ok_or(CoreError::DialogClosed)?;
        Ok(dialog
            .selection()
            .map(|bookmark| self.open_tab(Some(&bookmark.url), Some(&bookmark.title))))
    }

    pub fn cancel_bookmarks_dialog(&mut self) {
        self.bookmark_dialog = None;
    }

    /// Open the first bookmark with this title
    pub fn open_bookmark(&mut self, title: &str) -> Option<TabId> {
        let bookmark = self.bookmarks.resolve(title)?.clone();
        Some(self.open_tab(Some(&bookmark.url), Some(&bookmark.title)))
    }

    // === History operations ===

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.list()
    }

    pub fn history_panel(&self) -> &HistoryPanel {
        &self.history_panel
    }

    /// Returns the new visibility
    pub fn toggle_history(&mut self) -> bool {
        self.history_panel.toggle(&self.history)
    }

    /// Open a row of the visible history panel in a new tab, then close the panel
    pub fn open_history_entry(&mut self, row: usize) -> Result<TabId> {
        let entry = self.history_panel.row(row)?.clone();
        let id = self.open_tab(Some(&entry.url), Some(&entry.title));
        self.history_panel.hide();
        Ok(id)
    }

    // === Side panel and key bindings ===

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.config.shortcuts
    }

    pub fn open_shortcut(&mut self, index: usize) -> Result<TabId> {
        let url = self
            .config
            .shortcuts
            .get(index)
            .map(Shortcut::url)
            .ok_or(CoreError::UnknownShortcut(index))?;
        Ok(self.open_tab(Some(&url), None))
    }

    /// Run the action bound to `chord`. Returns `None` if nothing is bound.
    pub fn handle_key_chord(&mut self, chord: &str) -> Option<Result<Option<Notice>>> {
        let action = self
            .key_bindings
            .iter()
            .find(|binding| binding.matches(chord))
            .map(|binding| binding.action)?;
        Some(self.perform(action))
    }

    /// Run a toolbar or side panel action
    pub fn perform(&mut self, action: Action) -> Result<Option<Notice>> {
        tracing::debug!(?action, "Performing action");

        match action {
            Action::Back => self.go_back(),
            Action::Forward => self.go_forward(),
            Action::Reload => self.reload(),
            Action::BookmarkCurrentPage => return Ok(self.bookmark_current_page()),
            Action::OpenBookmarksDialog => {
                self.open_bookmarks_dialog();
            }
            Action::ToggleHistory => {
                self.toggle_history();
            }
            Action::OpenShortcut(index) => {
                self.open_shortcut(index)?;
            }
            Action::NewTab => {
                self.open_tab(None, None);
            }
        }

        Ok(None)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sloth_navigation::NavigationError;
    use sloth_tabs::{Renderer, RendererEvents};

    /// Loads instantly and reports like a real web view would.
    struct FakeRenderer {
        events: RendererEvents,
        stack: Vec<String>,
        index: usize,
    }

    impl FakeRenderer {
        fn announce(&self) {
            self.events.url_changed(self.current_url());
            self.events.load_finished();
        }
    }

    impl Renderer for FakeRenderer {
        fn load(&mut self, url: &str) {
            if !self.stack.is_empty() {
                self.stack.truncate(self.index + 1);
            }
            self.stack.push(url.to_string());
            self.index = self.stack.len() - 1;
            self.announce();
        }

        fn go_back(&mut self) {
            if self.index > 0 {
                self.index -= 1;
                self.announce();
            }
        }

        fn go_forward(&mut self) {
            if self.index + 1 < self.stack.len() {
                self.index += 1;
                self.announce();
            }
        }

        fn reload(&mut self) {
            self.events.load_finished();
        }

        fn current_url(&self) -> String {
            self.stack.get(self.index).cloned().unwrap_or_default()
        }

        fn current_title(&self) -> String {
            format!("Title: {}", self.current_url())
        }
    }

    fn fake_factory(events: RendererEvents) -> Box<dyn Renderer> {
        Box::new(FakeRenderer {
            events,
            stack: Vec::new(),
            index: 0,
        })
    }

    fn browser() -> Browser {
        let mut browser = Browser::new(Config::default(), fake_factory);
        browser.pump_notifications();
        browser
    }

    #[test]
    fn test_browser_initialization() {
        let mut browser = Browser::new(Config::default(), fake_factory);

        assert_eq!(browser.tab_count(), 1);
        assert_eq!(browser.tabs()[0].label, "Homepage");
        assert!(browser.tabs()[0].is_loading);

        assert_eq!(browser.pump_notifications(), 2);
        assert_eq!(browser.url_bar().text, "http://www.google.com");
        assert_eq!(browser.window_title(), "Title: http://www.google.com");
        assert_eq!(browser.history().len(), 1);
        assert!(!browser.tabs()[0].is_loading);
    }

    #[test]
    fn test_open_and_close_scenario() {
        let mut browser = browser();
        let home = browser.active_tab_id().unwrap();

        let example = browser.open_tab(Some("https://example.com"), Some("Example"));
        assert_eq!(browser.tab_count(), 2);
        assert_eq!(browser.active_tab_id(), Some(example));

        assert!(browser.close_tab(home).unwrap());
        assert_eq!(browser.tab_count(), 1);

        assert!(!browser.close_tab(example).unwrap());
        assert_eq!(browser.tab_count(), 1);
    }

    #[test]
    fn test_submit_defaults_scheme() {
        let mut browser = browser();

        let url = browser.submit_url_bar_text("example.com");
        assert_eq!(url.as_deref(), Some("https://example.com"));

        browser.pump_notifications();
        assert_eq!(browser.url_bar().text, "https://example.com");
        assert_eq!(browser.url_bar().cursor, 0);
        assert_eq!(browser.window_title(), "Title: https://example.com");
        assert_eq!(
            browser.active_tab().unwrap().label,
            "Title: https://example.com"
        );
    }

    #[test]
    fn test_blank_submit_loads_nothing() {
        let mut browser = browser();
        assert!(browser.submit_url_bar_text("  ").is_none());
        assert_eq!(browser.pump_notifications(), 0);
    }

    #[test]
    fn test_background_url_change_leaves_url_bar() {
        let mut browser = browser();
        let a = browser.active_tab_id().unwrap();
        let b = browser.open_tab(Some("https://b.example"), Some("B"));
        browser.pump_notifications();

        browser.set_active(a).unwrap();
        assert_eq!(browser.url_bar().text, "http://www.google.com");

        assert!(browser.on_renderer_url_changed(b, "https://b.example/next"));
        assert_eq!(browser.url_bar().text, "http://www.google.com");
        let tabs = browser.tabs();
        assert_eq!(tabs[1].url, "https://b.example/next");

        assert!(browser.on_renderer_url_changed(a, "https://a.example/"));
        assert_eq!(browser.url_bar().text, "https://a.example/");
        assert_eq!(browser.url_bar().cursor, 0);
    }

    #[test]
    fn test_background_load_records_history_only() {
        let mut browser = browser();
        let a = browser.active_tab_id().unwrap();
        let b = browser.open_tab(Some("https://b.example"), None);
        browser.set_active(a).unwrap();

        let title_before = browser.window_title().to_string();
        browser.pump_notifications();

        assert_eq!(browser.window_title(), title_before);
        assert_eq!(browser.history().len(), 2);
        assert_eq!(browser.history()[1].url, "https://b.example");

        let tabs = browser.tabs();
        let tab_b = tabs.iter().find(|t| t.id == b).unwrap();
        assert_eq!(tab_b.label, "Title: https://b.example");
    }

    #[derive(Debug, Clone)]
    enum LoadOp {
        /// Load finished reported straight to the browser; index 3 is a closed tab
        Finished(usize),
        /// Switch to a live tab and reload it through its renderer
        Reload(usize),
    }

    fn load_op_strategy() -> impl Strategy<Value = LoadOp> {
        prop_oneof![
            (0_usize..4).prop_map(LoadOp::Finished),
            (0_usize..3).prop_map(LoadOp::Reload),
        ]
    }

    proptest! {
        #[test]
        fn test_history_counts_every_load_finished(
            ops in prop::collection::vec(load_op_strategy(), 0..48)
        ) {
            let mut browser = browser();
            let a = browser.active_tab_id().unwrap();
            let b = browser.open_tab(Some("https://b.example"), None);
            let c = browser.open_tab(Some("https://c.example"), None);
            let gone = browser.open_tab(Some("https://gone.example"), None);
            browser.close_tab(gone).unwrap();
            browser.pump_notifications();

            let ids = [a, b, c, gone];
            let urls = ["http://www.google.com", "https://b.example", "https://c.example"];
            let before = browser.history().len();
            let mut expected: Vec<&str> = Vec::new();

            for op in ops {
                match op {
                    LoadOp::Finished(index) => {
                        let applied = browser.on_renderer_load_finished(ids[index]);
                        prop_assert_eq!(applied, index < urls.len());
                        if applied {
                            expected.push(urls[index]);
                        }
                    }
                    LoadOp::Reload(index) => {
                        browser.set_active(ids[index]).unwrap();
                        browser.reload();
                        prop_assert_eq!(browser.pump_notifications(), 1);
                        expected.push(urls[index]);
                    }
                }
            }

            let history = browser.history();
            prop_assert_eq!(history.len(), before + expected.len());
            let recorded: Vec<&str> = history[before..].iter().map(|e| e.url.as_str()).collect();
            prop_assert_eq!(recorded, expected);
        }
    }

    #[test]
    fn test_notifications_from_closed_tab_ignored() {
        let mut browser = browser();
        let b = browser.open_tab(Some("https://b.example"), None);
        let history_before = browser.history().len();

        // Closed before its notifications are applied
        browser.close_tab(b).unwrap();
        assert_eq!(browser.pump_notifications(), 2);

        assert_eq!(browser.history().len(), history_before);
        assert_eq!(browser.url_bar().text, "http://www.google.com");
        assert!(!browser.on_renderer_url_changed(b, "https://b.example/late"));
        assert!(!browser.on_renderer_load_finished(b));
    }

    #[test]
    fn test_set_active_refreshes_chrome() {
        let mut browser = browser();
        let a = browser.active_tab_id().unwrap();
        let b = browser.open_tab(Some("https://b.example"), None);
        browser.pump_notifications();

        assert_eq!(browser.window_title(), "Title: https://b.example");
        browser.set_active(a).unwrap();
        assert_eq!(browser.window_title(), "Title: http://www.google.com");
        assert_eq!(browser.url_bar().text, "http://www.google.com");

        browser.set_active_at(1).unwrap();
        assert_eq!(browser.active_tab_id(), Some(b));
        assert!(browser.set_active(TabId::new()).is_err());
    }

    #[test]
    fn test_closing_active_tab_refreshes_chrome() {
        let mut browser = browser();
        browser.open_tab(Some("https://b.example"), None);
        browser.pump_notifications();

        assert!(browser.close_tab_at(1).unwrap());
        assert_eq!(browser.url_bar().text, "http://www.google.com");
        assert_eq!(browser.window_title(), "Title: http://www.google.com");
    }

    #[test]
    fn test_back_and_forward() {
        let mut browser = browser();
        browser.submit_url_bar_text("https://one.example");
        browser.pump_notifications();

        browser.go_back();
        browser.pump_notifications();
        assert_eq!(browser.url_bar().text, "http://www.google.com");

        browser.go_forward();
        browser.pump_notifications();
        assert_eq!(browser.url_bar().text, "https://one.example");

        // Nothing further forward
        browser.go_forward();
        assert_eq!(browser.pump_notifications(), 0);

        browser.reload();
        assert_eq!(browser.pump_notifications(), 1);
    }

    #[test]
    fn test_tab_bar_double_click() {
        let mut browser = browser();

        assert!(browser.on_tab_bar_double_clicked(Some(0)).is_none());
        assert_eq!(browser.tab_count(), 1);

        let id = browser.on_tab_bar_double_clicked(None).unwrap();
        assert_eq!(browser.tab_count(), 2);
        let tab = browser.active_tab().unwrap();
        assert_eq!(tab.id, id);
        assert_eq!(tab.label, "Blank");
        assert_eq!(browser.url_bar().text, "https://google.com");
    }

    #[test]
    fn test_bookmark_current_page() {
        let mut browser = browser();

        let added = browser.bookmark_current_page().unwrap();
        assert_eq!(added.title, "Bookmark Added");
        let again = browser.bookmark_current_page().unwrap();
        assert_eq!(again.title, "Bookmark Exists!");

        assert_eq!(browser.bookmarks().len(), 1);
        assert_eq!(browser.bookmarks()[0].url, "http://www.google.com");
        assert_eq!(
            browser.bookmarks()[0].title,
            "Title: http://www.google.com"
        );
    }

    #[test]
    fn test_bookmark_scenario() {
        let mut browser = browser();
        assert_eq!(
            browser.add_bookmark("Example", "https://example.com"),
            AddOutcome::Added
        );
        assert_eq!(
            browser.add_bookmark("Example", "https://example.com"),
            AddOutcome::AlreadyExists
        );
        assert_eq!(browser.bookmarks().len(), 1);
    }

    #[test]
    fn test_bookmarks_dialog_opens_selected_row() {
        let mut browser = browser();
        browser.add_bookmark("Docs", "https://docs.rs");
        browser.add_bookmark("Docs", "https://doc.rust-lang.org");

        assert_eq!(browser.open_bookmarks_dialog().rows.len(), 2);
        browser.select_bookmark(1).unwrap();
        let id = browser.accept_bookmarks_dialog().unwrap().unwrap();

        let tab = browser.active_tab().unwrap();
        assert_eq!(tab.id, id);
        assert_eq!(tab.label, "Docs");
        assert_eq!(tab.url, "https://doc.rust-lang.org");
        assert!(browser.bookmark_dialog().is_none());
    }

    #[test]
    fn test_bookmarks_dialog_without_selection() {
        let mut browser = browser();
        browser.add_bookmark("Docs", "https://docs.rs");

        browser.open_bookmarks_dialog();
        assert!(browser.accept_bookmarks_dialog().unwrap().is_none());
        assert_eq!(browser.tab_count(), 1);

        browser.open_bookmarks_dialog();
        browser.cancel_bookmarks_dialog();
        assert!(matches!(
            browser.select_bookmark(0),
            Err(CoreError::DialogClosed)
        ));
        assert!(browser.accept_bookmarks_dialog().is_err());
    }

    #[test]
    fn test_open_bookmark_by_title() {
        let mut browser = browser();
        browser.add_bookmark("Docs", "https://docs.rs");
        browser.add_bookmark("Docs", "https://doc.rust-lang.org");

        browser.open_bookmark("Docs").unwrap();
        assert_eq!(browser.active_tab().unwrap().url, "https://docs.rs");
        assert!(browser.open_bookmark("Missing").is_none());
    }

    #[test]
    fn test_open_history_entry() {
        let mut browser = browser();
        browser.submit_url_bar_text("rust-lang.org");
        browser.pump_notifications();

        assert!(browser.toggle_history());
        assert_eq!(browser.history_panel().rows().len(), 2);

        let id = browser.open_history_entry(1).unwrap();
        let tab = browser.active_tab().unwrap();
        assert_eq!(tab.id, id);
        assert_eq!(tab.label, "Title: https://rust-lang.org");
        assert_eq!(tab.url, "https://rust-lang.org");
        assert!(!browser.history_panel().is_visible());

        assert!(browser.toggle_history());
        assert!(matches!(
            browser.open_history_entry(5),
            Err(CoreError::Navigation(NavigationError::HistoryIndex(5)))
        ));
    }

    #[test]
    fn test_open_history_entry_needs_visible_panel() {
        let mut browser = browser();

        assert!(browser.toggle_history());
        assert!(!browser.toggle_history());
        browser.submit_url_bar_text("rust-lang.org");
        browser.pump_notifications();

        assert!(matches!(
            browser.open_history_entry(0),
            Err(CoreError::Navigation(NavigationError::PanelHidden))
        ));
        assert_eq!(browser.tab_count(), 1);
        assert!(!browser.history_panel().is_visible());

        // Reopening picks up loads made while it was hidden
        assert!(browser.toggle_history());
        let id = browser.open_history_entry(1).unwrap();
        assert_eq!(browser.active_tab_id(), Some(id));
        assert_eq!(browser.tab_count(), 2);
        assert!(!browser.history_panel().is_visible());
    }

    #[test]
    fn test_shortcuts() {
        let mut browser = browser();

        browser.open_shortcut(1).unwrap();
        let tab = browser.active_tab().unwrap();
        assert_eq!(tab.url, "https://gmail.com");
        assert_eq!(tab.label, "Blank");

        assert!(matches!(
            browser.open_shortcut(3),
            Err(CoreError::UnknownShortcut(3))
        ));
    }

    #[test]
    fn test_history_key_binding() {
        let mut browser = browser();

        assert!(browser.handle_key_chord("Ctrl+H").is_some());
        assert!(browser.history_panel().is_visible());
        assert!(browser.handle_key_chord("ctrl+h").is_some());
        assert!(!browser.history_panel().is_visible());

        assert!(browser.handle_key_chord("Ctrl+J").is_none());
    }

    #[test]
    fn test_perform_actions() {
        let mut browser = browser();

        let notice = browser.perform(Action::BookmarkCurrentPage).unwrap();
        assert_eq!(notice.unwrap().title, "Bookmark Added");

        browser.perform(Action::NewTab).unwrap();
        browser.perform(Action::OpenShortcut(2)).unwrap();
        assert_eq!(browser.tab_count(), 3);
        assert_eq!(browser.active_tab().unwrap().url, "https://youtube.com");

        browser.perform(Action::OpenBookmarksDialog).unwrap();
        assert_eq!(browser.bookmark_dialog().unwrap().rows.len(), 1);

        assert!(browser.perform(Action::OpenShortcut(9)).is_err());
    }
}
