//! Application state management
use sloth_core::{Browser, Config, Result};

use crate::renderer::HeadlessRenderer;

/// Browser plus the glue a host needs around it
pub struct AppState {
    browser: Browser,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let mut browser = Browser::new(config, HeadlessRenderer::boxed);
        browser.pump_notifications();

        Self { browser }
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Run `f` against the browser, then apply whatever the renderers
    /// reported meanwhile.
    pub fn with_browser<F, T>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Browser) -> Result<T>,
    {
        let result = f(&mut self.browser);
        let applied = self.browser.pump_notifications();
        if applied > 0 {
            tracing::debug!(applied, "Applied renderer notifications");
        }
        result
    }
}
