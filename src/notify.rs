//! Live notification fan-out. Subscribers (the SSE endpoint) get a copy of
//! every bell item; the channel is never the record of truth and a slow or
//! absent consumer never blocks a workflow operation.

use tokio::sync::broadcast;

use crate::models::NotificationItem;

#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<NotificationItem>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        Notifier { tx }
    }

    pub fn publish(&self, item: NotificationItem) {
        // No subscribers is fine; the store already holds the item.
        let _ = self.tx.send(item);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationItem> {
        self.tx.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
