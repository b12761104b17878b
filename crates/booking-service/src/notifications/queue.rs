use tokio::sync::mpsc;
use tracing::warn;

use super::{Notification, NotificationError};

/// Sending half of the bounded notification channel
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    tx: mpsc::Sender<Notification>,
}

impl NotificationQueue {
    /// Create a queue and the receiver the worker consumes
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Enqueue without waiting
    pub fn try_enqueue(&self, notification: Notification) -> Result<(), NotificationError> {
        self.tx.try_send(notification).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => NotificationError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => NotificationError::QueueClosed,
        })
    }

    /// Enqueue, logging and dropping the notification on failure
    pub fn dispatch(&self, notification: Notification) {
        let template = notification.template.name();
        if let Err(e) = self.try_enqueue(notification) {
            warn!(template, error = %e, "Dropping notification");
        }
    }
}
