//! Headless renderer
//!
//! Stands in for an embedded web view: keeps a back/forward list, "loads"
//! instantly, and titles each page after its host.

use sloth_core::{Renderer, RendererEvents};
use url::Url;

pub struct HeadlessRenderer {
    events: RendererEvents,
    entries: Vec<String>,
    index: usize,
}

impl HeadlessRenderer {
    pub fn new(events: RendererEvents) -> Self {
        Self {
            events,
            entries: Vec::new(),
            index: 0,
        }
    }

    pub fn boxed(events: RendererEvents) -> Box<dyn Renderer> {
        Box::new(Self::new(events))
    }

    fn committed(&self) {
        self.events.url_changed(self.current_url());
        self.events.load_finished();
    }
}

impl Renderer for HeadlessRenderer {
    fn load(&mut self, url: &str) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
        self.committed();
    }

    fn go_back(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.committed();
        }
    }

    fn go_forward(&mut self) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            self.committed();
        }
    }

    fn reload(&mut self) {
        if !self.entries.is_empty() {
            self.events.load_finished();
        }
    }

    fn current_url(&self) -> String {
        self.entries.get(self.index).cloned().unwrap_or_default()
    }

    fn current_title(&self) -> String {
        let url = self.current_url();
        Url::parse(&url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_string))
            .unwrap_or(url)
    }
}
