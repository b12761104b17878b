//! In-memory repositories
//!
//! [`MemoryStore`] implements every repository trait over `DashMap`s so the
//! service and API layers can run without PostgreSQL (tests, local demos).
//! Booking follows the same contract as the PostgreSQL repository: a per-offer
//! async mutex is held across the overlap check and the insert.

mod offer_types;
mod offers;
mod reservations;
mod reviews;
mod store;
mod users;

pub use store::{MemoryStore, DEFAULT_OFFER_TYPES};
