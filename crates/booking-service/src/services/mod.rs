//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and orchestrates repository
//! calls around the pure rules in `booking-core`.

pub mod auth;
pub mod availability;
pub mod catalog;
pub mod context;
pub mod error;
pub mod offer;
pub mod reservation;
pub mod review;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::AuthService;
pub use availability::AvailabilityService;
pub use catalog::CatalogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use offer::OfferService;
pub use reservation::ReservationService;
pub use review::ReviewService;
pub use user::UserService;
