//! Renderer capability
//!
//! Fetching, parsing and drawing pages belong to the host's embedded web
//! view. A tab only needs to command it and hear back when the URL changes
//! or a load completes. Notifications travel over an unbounded channel and
//! are applied later on the dispatch thread, in arrival order.

use serde::Serialize;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use crate::tab::TabId;

/// The page-rendering component a tab drives.
pub trait Renderer {
    fn load(&mut self, url: &str);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn current_url(&self) -> String;
    fn current_title(&self) -> String;
}

/// Creates one renderer per tab.
///
/// The `events` handle is already scoped to the new tab; the renderer keeps
/// it and calls [`RendererEvents::url_changed`] / [`RendererEvents::load_finished`]
/// as its page progresses.
pub trait RendererFactory {
    fn create(&mut self, events: RendererEvents) -> Box<dyn Renderer>;
}

impl<F> RendererFactory for F
where
    F: FnMut(RendererEvents) -> Box<dyn Renderer>,
{
    fn create(&mut self, events: RendererEvents) -> Box<dyn Renderer> {
        self(events)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RendererEvent {
    UrlChanged(String),
    LoadFinished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RendererNotification {
    pub tab_id: TabId,
    pub event: RendererEvent,
}

/// Subscription handle handed to a renderer at creation.
#[derive(Debug, Clone)]
pub struct RendererEvents {
    tab_id: TabId,
    tx: UnboundedSender<RendererNotification>,
}

impl RendererEvents {
    pub fn url_changed(&self, url: impl Into<String>) {
        self.emit(RendererEvent::UrlChanged(url.into()));
    }

    pub fn load_finished(&self) {
        self.emit(RendererEvent::LoadFinished);
    }

    fn emit(&self, event: RendererEvent) {
        // The dispatcher may already be gone during shutdown.
        let _ = self.tx.send(RendererNotification {
            tab_id: self.tab_id,
            event,
        });
    }
}

/// Sending half kept by the tab manager; mints per-tab handles.
#[derive(Debug, Clone)]
pub struct NotificationSender {
    tx: UnboundedSender<RendererNotification>,
}

impl NotificationSender {
    pub fn events_for(&self, tab_id: TabId) -> RendererEvents {
        RendererEvents {
            tab_id,
            tx: self.tx.clone(),
        }
    }
}

/// Receiving half owned by the dispatcher.
#[derive(Debug)]
pub struct NotificationQueue {
    rx: UnboundedReceiver<RendererNotification>,
}

impl NotificationQueue {
    /// Take everything queued so far without blocking.
    pub fn drain(&mut self) -> Vec<RendererNotification> {
        let mut out = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(notification) => out.push(notification),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

pub fn notification_channel() -> (NotificationSender, NotificationQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (NotificationSender { tx }, NotificationQueue { rx })
}
