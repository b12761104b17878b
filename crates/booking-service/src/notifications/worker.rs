use std::sync::Arc;

use booking_core::UserRepository;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

use super::{Notification, NotificationSender, Recipient};

/// Spawn the task draining the notification queue. It stops once every
/// [`NotificationQueue`](super::NotificationQueue) clone has been dropped.
pub fn spawn_worker(
    rx: mpsc::Receiver<Notification>,
    sender: Arc<dyn NotificationSender>,
    users: Arc<dyn UserRepository>,
) -> JoinHandle<()> {
    tokio::spawn(run(rx, sender, users))
}

#[instrument(skip_all)]
async fn run(
    mut rx: mpsc::Receiver<Notification>,
    sender: Arc<dyn NotificationSender>,
    users: Arc<dyn UserRepository>,
) {
    while let Some(notification) = rx.recv().await {
        let Some(to) = resolve(&notification, users.as_ref()).await else {
            continue;
        };
        let rendered = notification.render(&to);
        if let Err(e) = sender.deliver(&rendered).await {
            error!(
                template = notification.template.name(),
                to = %rendered.to,
                error = %e,
                "Notification delivery failed"
            );
        }
    }
    info!("Notification queue closed, worker stopping");
}

/// Email address for the recipient, or `None` when it cannot be found
async fn resolve(notification: &Notification, users: &dyn UserRepository) -> Option<String> {
    let template = notification.template.name();
    match &notification.recipient {
        Recipient::Email(email) => Some(email.clone()),
        Recipient::User(user_id) => match users.find_by_id(*user_id).await {
            Ok(Some(user)) => Some(user.email),
            Ok(None) => {
                warn!(user_id = %user_id, template, "Recipient vanished, dropping notification");
                None
            }
            Err(e) => {
                warn!(user_id = %user_id, template, error = %e, "Recipient lookup failed, dropping notification");
                None
            }
        },
    }
}
