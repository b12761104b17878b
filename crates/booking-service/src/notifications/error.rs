use booking_common::AppError;
use thiserror::Error;

/// Errors raised while queueing or delivering a notification
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification queue is full")]
    QueueFull,

    #[error("notification queue is closed")]
    QueueClosed,

    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("could not build message: {0}")]
    Message(String),

    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        AppError::Notification(err.to_string())
    }
}
