//! Database models - SQLx-compatible structs for PostgreSQL tables

mod offer;
mod reservation;
mod review;
mod user;

pub use offer::{OfferModel, OfferTypeModel};
pub use reservation::{ReservationModel, StatusModel};
pub use review::ReviewModel;
pub use user::UserModel;
