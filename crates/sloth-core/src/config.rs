//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CoreError;
use crate::shortcuts::{default_shortcuts, Shortcut};
use crate::Result;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "SLOTH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the tab opened at startup
    pub homepage: String,
    /// Label of the startup tab until its page loads
    pub homepage_label: String,
    /// URL for tabs opened without one
    pub new_tab_url: String,
    /// Label for tabs opened without one
    pub new_tab_label: String,
    /// Scheme prefixed to address bar input that has none
    pub default_scheme: String,
    /// Window title shown before any page has a title
    pub window_title: String,
    /// Side panel destinations
    pub shortcuts: Vec<Shortcut>,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Config from `SLOTH_CONFIG` if set, defaults otherwise
    pub fn from_env_or_default() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.homepage.trim().is_empty() {
            return Err(CoreError::Config("homepage cannot be empty".to_string()));
        }
        if self.new_tab_url.trim().is_empty() {
            return Err(CoreError::Config("new_tab_url cannot be empty".to_string()));
        }
        if self.default_scheme.is_empty()
            || !self
                .default_scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(CoreError::Config(format!(
                "invalid default_scheme: {:?}",
                self.default_scheme
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage: "http://www.google.com".to_string(),
            homepage_label: "Homepage".to_string(),
            new_tab_url: "https://google.com".to_string(),
            new_tab_label: "Blank".to_string(),
            default_scheme: "https".to_string(),
            window_title: "Sloth".to_string(),
            shortcuts: default_shortcuts(),
        }
    }
}
