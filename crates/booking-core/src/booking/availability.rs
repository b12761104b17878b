//! Availability predicate

use crate::entities::Reservation;
use crate::value_objects::StayRange;

/// `true` when no confirmed reservation in `existing` overlaps `range`.
///
/// Callers pass the reservations of a single offer; statuses other than
/// confirmed are ignored.
pub fn is_free<'a, I>(range: &StayRange, existing: I) -> bool
where
    I: IntoIterator<Item = &'a Reservation>,
{
    !existing.into_iter().any(|r| r.blocks(range))
}
