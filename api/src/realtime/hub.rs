//! Broadcast hub carrying change events between REST handlers and
//! WebSocket sessions.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use dh_core::domain::entities::knowledgebase::KbArticle;
use dh_core::domain::entities::task::Task;

/// Default buffer for the broadcast channel. A slow consumer that falls
/// further behind than this misses events instead of blocking the hub.
const CHANNEL_CAPACITY: usize = 256;

/// Change event on the wire, tagged by `type`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChangeEvent {
    /// A task was created or modified
    TaskUpdated { task: Task },

    /// A task was removed
    TaskDeleted { id: i64 },

    /// A knowledgebase article was created or modified
    KbUpdated { article: KbArticle },

    /// A knowledgebase article was removed
    KbDeleted { id: i64 },
}

/// A change event together with the connection that produced it, if any.
///
/// `origin` is `None` for events published by REST handlers; sessions use
/// it to avoid echoing a client's own event back to it.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub origin: Option<Uuid>,
    pub event: ChangeEvent,
}

/// Process-wide fan-out for change events
#[derive(Clone)]
pub struct EventHub {
    sender: broadcast::Sender<Envelope>,
}

impl EventHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish an event produced by a REST mutation.
    pub fn publish(&self, event: ChangeEvent) {
        // Send only fails when no session is subscribed; that is fine.
        let _ = self.sender.send(Envelope {
            origin: None,
            event,
        });
    }

    /// Publish an event received from a connected client.
    pub fn publish_from(&self, origin: Uuid, event: ChangeEvent) {
        let _ = self.sender.send(Envelope {
            origin: Some(origin),
            event,
        });
    }

    /// Subscribe a new session to the feed.
    pub fn subscribe(&self) -> broadcast::Receiver<Envelope> {
        self.sender.subscribe()
    }

    /// Number of currently subscribed sessions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}
