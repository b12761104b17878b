//! Delivery transports

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use booking_common::{NotificationConfig, NotificationTransport};

use super::{NotificationError, RenderedNotification};

/// Delivers rendered notifications
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn deliver(&self, message: &RenderedNotification) -> Result<(), NotificationError>;
}

/// Writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSender;

#[async_trait]
impl NotificationSender for LogSender {
    async fn deliver(&self, message: &RenderedNotification) -> Result<(), NotificationError> {
        info!(
            target: "notifications",
            to = %message.to,
            subject = %message.subject,
            "{}",
            message.body
        );
        Ok(())
    }
}

/// In-memory outbox that tests can wait on
#[derive(Debug, Default)]
pub struct StubMailbox {
    pub messages: Mutex<Vec<RenderedNotification>>,
    pub signal: Condvar,
}

impl StubMailbox {
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of everything delivered so far
    pub fn snapshot(&self) -> Vec<RenderedNotification> {
        self.messages.lock().clone()
    }

    /// Block until at least `count` messages arrived or `timeout` passed.
    /// Returns whether the count was reached.
    pub fn wait_for_len(&self, count: usize, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut messages = self.messages.lock();
        while messages.len() < count {
            if self.signal.wait_until(&mut messages, deadline).timed_out() {
                return messages.len() >= count;
            }
        }
        true
    }
}

/// Pushes notifications into a [`StubMailbox`]
#[derive(Debug, Clone)]
pub struct StubSender {
    mailbox: Arc<StubMailbox>,
}

impl StubSender {
    pub fn new(mailbox: Arc<StubMailbox>) -> Self {
        Self { mailbox }
    }
}

#[async_trait]
impl NotificationSender for StubSender {
    async fn deliver(&self, message: &RenderedNotification) -> Result<(), NotificationError> {
        let mut messages = self.mailbox.messages.lock();
        messages.push(message.clone());
        self.mailbox.signal.notify_all();
        debug!(to = %message.to, "stub notification stored");
        Ok(())
    }
}

/// STARTTLS SMTP relay. Sends run on the blocking pool.
#[derive(Clone)]
pub struct SmtpSender {
    from: Mailbox,
    transport: SmtpTransport,
}

impl SmtpSender {
    pub fn new(server: &str, from_address: &str, password: &str) -> Result<Self, NotificationError> {
        let from: Mailbox = from_address
            .parse()
            .map_err(|_| NotificationError::InvalidAddress(from_address.to_string()))?;

        let transport = SmtpTransport::starttls_relay(server)
            .map_err(|e| NotificationError::Transport(e.to_string()))?
            .credentials(Credentials::new(from.email.to_string(), password.to_string()))
            .build();

        Ok(Self { from, transport })
    }

    fn build_message(&self, message: &RenderedNotification) -> Result<Message, NotificationError> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|_| NotificationError::InvalidAddress(message.to.clone()))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| NotificationError::Message(e.to_string()))
    }
}

impl std::fmt::Debug for SmtpSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSender").field("from", &self.from.to_string()).finish()
    }
}

#[async_trait]
impl NotificationSender for SmtpSender {
    async fn deliver(&self, message: &RenderedNotification) -> Result<(), NotificationError> {
        let email = self.build_message(message)?;
        let transport = self.transport.clone();

        let response = tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        debug!(to = %message.to, code = %response.code(), "smtp notification sent");
        Ok(())
    }
}

/// Pick the sender configured for this process.
///
/// `stub` is used for the stub transport; a fresh mailbox is created when absent.
pub fn sender_from_config(
    config: &NotificationConfig,
    stub: Option<Arc<StubMailbox>>,
) -> Result<Arc<dyn NotificationSender>, NotificationError> {
    Ok(match &config.transport {
        NotificationTransport::Log => Arc::new(LogSender),
        NotificationTransport::Stub => Arc::new(StubSender::new(stub.unwrap_or_default())),
        NotificationTransport::Smtp { server, password } => {
            Arc::new(SmtpSender::new(server, &config.from_address, password)?)
        }
    })
}
