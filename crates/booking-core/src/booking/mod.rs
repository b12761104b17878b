//! Booking engine rules
//!
//! Pure functions shared by every repository backend: the overlap predicate,
//! price derivation, calendar expansion, and the ordered precondition checks
//! of a booking. Nothing here touches storage or the clock; callers pass
//! `today` and the reservations they loaded.

pub mod availability;
pub mod calendar;
pub mod pricing;
pub mod rules;

pub use availability::is_free;
pub use calendar::{blocked_dates, MonthWindow};
pub use pricing::total_price;
pub use rules::{authorize_booker, validate_against_offer, validate_stay};
