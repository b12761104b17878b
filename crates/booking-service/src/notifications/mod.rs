//! Booking notifications
//!
//! Services enqueue a [`Notification`] on the bounded [`NotificationQueue`]
//! with `try_send` and move on. A worker task spawned at startup drains the
//! queue, resolves account recipients to their email address and hands each
//! rendered message to a [`NotificationSender`]. Delivery
//! is at-most-once: a full queue or a failed send is logged and dropped.

mod error;
mod message;
mod queue;
mod sender;
mod worker;

pub use error::NotificationError;
pub use message::{Notification, NotificationTemplate, Recipient, RenderedNotification};
pub use queue::NotificationQueue;
pub use sender::{sender_from_config, LogSender, NotificationSender, SmtpSender, StubMailbox, StubSender};
pub use worker::spawn_worker;
