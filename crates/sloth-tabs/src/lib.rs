//! Sloth Tab Management
//!
//! Owns the ordered set of open tabs, the active-tab pointer, and the
//! renderer each tab drives. Renderers report back through a notification
//! channel whose messages are tagged with the tab id they belong to, so a
//! late message from a closed tab can be recognised and dropped.

mod error;
mod manager;
mod renderer;
mod state;
mod tab;

pub use error::TabError;
pub use manager::TabManager;
pub use renderer::{
    notification_channel, NotificationQueue, NotificationSender, Renderer, RendererEvent,
    RendererEvents, RendererFactory, RendererNotification,
};
pub use state::LoadState;
pub use tab::{Tab, TabId, TabInfo};

pub type Result<T> = std::result::Result<T, TabError>;
