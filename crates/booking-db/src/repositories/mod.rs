//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in booking-core.

mod error;
mod offer;
mod offer_type;
mod reservation;
mod review;
mod status;
mod user;

pub use offer::PgOfferRepository;
pub use offer_type::PgOfferTypeRepository;
pub use reservation::PgReservationRepository;
pub use review::PgReviewRepository;
pub use status::load_status_catalog;
pub use user::PgUserRepository;
