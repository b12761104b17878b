//! Route handlers
//!
//! Thin adapters between HTTP and the booking services, grouped by resource.

pub mod auth;
pub mod catalog;
pub mod health;
pub mod offers;
pub mod reservations;
pub mod reviews;
pub mod users;
