//! Input resolution for the address bar
//!
//! 1. Text that already carries a scheme → loaded as typed
//! 2. Text without a scheme → default scheme prefixed
//! 3. Anything the URL parser rejects for another reason → loaded as typed;
//!    the renderer shows its own error page

use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

pub struct InputResolver {
    /// Scheme prefixed to input that has none
    default_scheme: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            default_scheme: "https".to_string(),
        }
    }

    pub fn with_default_scheme(scheme: impl Into<String>) -> Self {
        Self {
            default_scheme: scheme.into(),
        }
    }

    /// Turn address bar text into the URL handed to the renderer.
    ///
    /// Returns `None` for blank input.
    pub fn resolve(&self, input: &str) -> Option<String> {
        let input = input.trim();

        if input.is_empty() {
            return None;
        }

        match Url::parse(input) {
            Ok(_) => Some(input.to_string()),
            Err(ParseError::RelativeUrlWithoutBase) => {
                Some(format!("{}://{}", self.default_scheme, input))
            }
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "Passing unparsed input through");
                Some(input.to_string())
            }
        }
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Address bar contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlBar {
    pub text: String,
    /// Caret position in characters
    pub cursor: usize,
}

impl UrlBar {
    /// Replace the text from a navigation; the caret goes back to the start
    /// so the beginning of long URLs stays visible.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = 0;
    }

    /// Replace the text from user typing; the caret follows the text.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }
}
