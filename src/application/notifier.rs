// Notification channel - Broadcasts outbound notifications to subscribers
use crate::domain::notification::Notification;
use tokio::sync::broadcast;

/// One ring shared by every instance. A subscriber that falls more than
/// `capacity` notifications behind loses the oldest ones, whichever instance
/// they belonged to, including its own `ALL-DATA-RECEIVED`.
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Fire and forget; nobody listening is not an error.
    pub fn send(&self, notification: Notification) {
        tracing::debug!(
            "Sending {} for {}",
            notification.name(),
            notification.unique_id()
        );
        let _ = self.tx.send(notification);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}
