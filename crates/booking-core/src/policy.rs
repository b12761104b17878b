//! Access control policy
//!
//! Roles map exhaustively onto a [`Capability`], which decides how much of
//! the reservation table an actor may see. Mutation rules for offers,
//! reservations and reviews live next to it so handlers never inspect roles
//! directly.

use serde::{Deserialize, Serialize};

use crate::entities::{Offer, Reservation, Review};
use crate::error::DomainError;
use crate::value_objects::{Role, UserId};

/// The authenticated caller of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

/// Reservation visibility granted by a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewAll,
    /// Own bookings plus bookings on own offers
    ViewAsLandlord,
    ViewOwn,
}

/// Row filter derived from a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationScope {
    All,
    /// Booked by the user or on one of the user's offers
    GuestOrLandlord(UserId),
    /// Booked by the user
    Guest(UserId),
    /// On one of the user's offers, regardless of who booked
    OnOffersOf(UserId),
}

impl ReservationScope {
    /// Whether a reservation on an offer owned by `offer_landlord` is in scope
    pub fn admits(&self, reservation: &Reservation, offer_landlord: UserId) -> bool {
        match *self {
            Self::All => true,
            Self::GuestOrLandlord(id) => reservation.user_id == id || offer_landlord == id,
            Self::Guest(id) => reservation.user_id == id,
            Self::OnOffersOf(id) => offer_landlord == id,
        }
    }
}

impl Actor {
    pub const fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    pub const fn capability(&self) -> Capability {
        match self.role {
            Role::Admin => Capability::ViewAll,
            Role::Landlord => Capability::ViewAsLandlord,
            Role::User => Capability::ViewOwn,
        }
    }

    /// Reservations this actor may list or retrieve
    pub const fn reservation_scope(&self) -> ReservationScope {
        match self.capability() {
            Capability::ViewAll => ReservationScope::All,
            Capability::ViewAsLandlord => ReservationScope::GuestOrLandlord(self.id),
            Capability::ViewOwn => ReservationScope::Guest(self.id),
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn can_view_reservation(&self, reservation: &Reservation, offer: &Offer) -> bool {
        self.reservation_scope().admits(reservation, offer.landlord_id)
    }

    /// Guest, the offer's landlord, or an admin
    pub fn can_cancel(&self, reservation: &Reservation, offer: &Offer) -> bool {
        self.is_admin() || reservation.user_id == self.id || offer.is_owned_by(self.id)
    }

    pub fn ensure_can_create_offer(&self) -> Result<(), DomainError> {
        match self.role {
            Role::Admin | Role::Landlord => Ok(()),
            Role::User => Err(DomainError::LandlordRoleRequired),
        }
    }

    pub fn ensure_can_manage_offer(&self, offer: &Offer) -> Result<(), DomainError> {
        if self.is_admin() || offer.is_owned_by(self.id) {
            Ok(())
        } else {
            Err(DomainError::NotOfferOwner)
        }
    }

    /// Offer types are a shared catalogue curated by admins
    pub fn ensure_can_manage_offer_types(&self) -> Result<(), DomainError> {
        match self.role {
            Role::Admin => Ok(()),
            Role::Landlord | Role::User => Err(DomainError::AdminRoleRequired),
        }
    }

    pub fn ensure_can_manage_review(&self, review: &Review) -> Result<(), DomainError> {
        if self.is_admin() || review.user_id == self.id {
            Ok(())
        } else {
            Err(DomainError::NotReviewAuthor)
        }
    }
}
