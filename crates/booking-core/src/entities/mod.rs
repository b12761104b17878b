//! Domain entities - core business objects

mod offer;
mod offer_type;
mod reservation;
mod review;
mod user;

pub use offer::Offer;
pub use offer_type::OfferType;
pub use reservation::Reservation;
pub use review::Review;
pub use user::User;
