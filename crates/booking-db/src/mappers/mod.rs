//! Entity to model mappers
//!
//! Conversions from database rows to domain entities (booking-core).
//! Rows whose stored values cannot form a valid entity (unknown role,
//! unknown status id) surface as internal errors.

mod offer;
mod reservation;
mod review;
mod user;

pub use reservation::reservation_from_model;
