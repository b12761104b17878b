//! # booking-service
//!
//! Application layer: services implementing the booking use cases, request
//! and response DTOs, and the notification pipeline.

pub mod dto;
pub mod notifications;
pub mod services;

pub use notifications::{
    sender_from_config, spawn_worker, Notification, NotificationQueue, NotificationSender,
    Recipient, StubMailbox,
};
pub use services::{
    AuthService, AvailabilityService, CatalogService, OfferService, ReservationService,
    ReviewService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    UserService,
};
