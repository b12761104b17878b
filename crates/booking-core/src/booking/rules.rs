//! Ordered preconditions of the booking transaction
//!
//! The service runs these in sequence and the first failure wins:
//! actor role, date range, offer lookup, guest count, ownership. The overlap
//! check comes last, inside the repository's atomic insert.

use chrono::NaiveDate;

use crate::entities::Offer;
use crate::error::DomainError;
use crate::policy::Actor;
use crate::value_objects::{Role, StayRange};

/// Admins may look at everything but never book
pub fn authorize_booker(actor: &Actor) -> Result<(), DomainError> {
    match actor.role {
        Role::Admin => Err(DomainError::AdminCannotBook),
        Role::Landlord | Role::User => Ok(()),
    }
}

/// `start < end` and the stay does not begin before `today`
pub fn validate_stay(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<StayRange, DomainError> {
    let range = StayRange::new(start, end)?;
    if range.start() < today {
        return Err(DomainError::StartInPast);
    }
    Ok(range)
}

/// Guest count fits the offer, and the actor is not its landlord
pub fn validate_against_offer(actor: &Actor, offer: &Offer, guests: i32) -> Result<(), DomainError> {
    if guests < 1 {
        return Err(DomainError::ValidationError(
            "guests must be at least 1".to_string(),
        ));
    }
    if guests > offer.max_guests {
        return Err(DomainError::GuestLimitExceeded {
            requested: guests,
            max: offer.max_guests,
        });
    }
    if offer.is_owned_by(actor.id) {
        return Err(DomainError::CannotBookOwnOffer);
    }
    Ok(())
}
