use std::sync::Arc;

use tokio::sync::broadcast;

use wishwell_types::events::FeedEvent;

/// Fans feed events out to every connected subscriber.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    /// Broadcast channel for feed events — all connected clients receive
    /// all events. Delivery is best-effort; there is no replay for
    /// subscribers that connect later.
    broadcast_tx: broadcast::Sender<FeedEvent>,
}

impl Dispatcher {
    pub fn new() -> Self {
        let (broadcast_tx, _) = broadcast::channel(1024);
        Self {
            inner: Arc::new(DispatcherInner { broadcast_tx }),
        }
    }

    /// Subscribe to feed events. Returns a broadcast receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.inner.broadcast_tx.subscribe()
    }

    /// Publish an event to all connected subscribers. Fire-and-forget:
    /// publishing with no subscribers is not an error.
    pub fn publish(&self, event: FeedEvent) {
        let _ = self.inner.broadcast_tx.send(event);
    }

    /// Number of currently connected subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.broadcast_tx.receiver_count()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
