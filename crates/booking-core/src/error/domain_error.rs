//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::{OfferId, OfferTypeId, ReservationId, ReviewId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Offer not found: {0}")]
    OfferNotFound(OfferId),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Review not found: {0}")]
    ReviewNotFound(ReviewId),

    #[error("Offer type not found: {0}")]
    OfferTypeNotFound(OfferTypeId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("start_date must be before end_date (got {start} .. {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("start_date cannot be in the past")]
    StartInPast,

    #[error("Guest count {requested} exceeds the offer limit of {max}")]
    GuestLimitExceeded { requested: i32, max: i32 },

    #[error("Month must be between 1 and 12 (got {0})")]
    InvalidMonth(u32),

    #[error("Rating must be between 1 and 5 (got {0})")]
    InvalidRating(i32),

    #[error("Total price overflows for this stay")]
    PriceOverflow,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Unknown offer type: {0}")]
    UnknownOfferType(OfferTypeId),

    #[error("Unknown amenity: {0}")]
    UnknownAmenity(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admins are not allowed to create reservations")]
    AdminCannotBook,

    #[error("You cannot make a reservation on your own offer")]
    CannotBookOwnOffer,

    #[error("Only landlords can manage offers")]
    LandlordRoleRequired,

    #[error("Only admins can manage offer types")]
    AdminRoleRequired,

    #[error("Not the owner of this offer")]
    NotOfferOwner,

    #[error("Not the author of this review")]
    NotReviewAuthor,

    #[error("Not a participant of this reservation")]
    NotReservationParticipant,

    #[error("Role cannot be self-assigned: {0}")]
    RoleNotAssignable(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("This time slot is already booked")]
    SlotAlreadyBooked,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Phone number already in use")]
    PhoneAlreadyExists,

    #[error("Reservation is not confirmed and cannot be cancelled")]
    AlreadyCancelled,

    #[error("Offer has upcoming confirmed reservations")]
    OfferHasUpcomingReservations,

    #[error("Offer type already exists: {0}")]
    OfferTypeExists(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Reservation status '{0}' is not configured")]
    MissingStatus(&'static str),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::OfferNotFound(_) => "UNKNOWN_OFFER",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::OfferTypeNotFound(_) => "UNKNOWN_OFFER_TYPE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::StartInPast => "START_IN_PAST",
            Self::GuestLimitExceeded { .. } => "GUEST_LIMIT_EXCEEDED",
            Self::InvalidMonth(_) => "INVALID_MONTH",
            Self::InvalidRating(_) => "INVALID_RATING",
            Self::PriceOverflow => "PRICE_OVERFLOW",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::UnknownOfferType(_) => "INVALID_OFFER_TYPE",
            Self::UnknownAmenity(_) => "INVALID_AMENITY",

            // Authorization
            Self::AdminCannotBook => "ADMIN_CANNOT_BOOK",
            Self::CannotBookOwnOffer => "CANNOT_BOOK_OWN_OFFER",
            Self::LandlordRoleRequired => "LANDLORD_ROLE_REQUIRED",
            Self::AdminRoleRequired => "ADMIN_ROLE_REQUIRED",
            Self::NotOfferOwner => "NOT_OFFER_OWNER",
            Self::NotReviewAuthor => "NOT_REVIEW_AUTHOR",
            Self::NotReservationParticipant => "NOT_RESERVATION_PARTICIPANT",
            Self::RoleNotAssignable(_) => "ROLE_NOT_ASSIGNABLE",

            // Conflict
            Self::SlotAlreadyBooked => "SLOT_ALREADY_BOOKED",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::PhoneAlreadyExists => "PHONE_ALREADY_EXISTS",
            Self::AlreadyCancelled => "ALREADY_CANCELLED",
            Self::OfferHasUpcomingReservations => "OFFER_HAS_UPCOMING_RESERVATIONS",
            Self::OfferTypeExists(_) => "OFFER_TYPE_EXISTS",

            // Configuration
            Self::MissingStatus(_) => "MISSING_STATUS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::OfferNotFound(_)
                | Self::ReservationNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::OfferTypeNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidRange { .. }
                | Self::StartInPast
                | Self::GuestLimitExceeded { .. }
                | Self::InvalidMonth(_)
                | Self::InvalidRating(_)
                | Self::PriceOverflow
                | Self::WeakPassword(_)
                | Self::UnknownOfferType(_)
                | Self::UnknownAmenity(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AdminCannotBook
                | Self::CannotBookOwnOffer
                | Self::LandlordRoleRequired
                | Self::AdminRoleRequired
                | Self::NotOfferOwner
                | Self::NotReviewAuthor
                | Self::NotReservationParticipant
                | Self::RoleNotAssignable(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::SlotAlreadyBooked
                | Self::EmailAlreadyExists
                | Self::PhoneAlreadyExists
                | Self::AlreadyCancelled
                | Self::OfferHasUpcomingReservations
                | Self::OfferTypeExists(_)
        )
    }

    /// Check if this is a deployment / configuration fault
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingStatus(_))
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::OfferNotFound(OfferId::new());
        assert_eq!(err.code(), "UNKNOWN_OFFER");

        assert_eq!(DomainError::SlotAlreadyBooked.code(), "SLOT_ALREADY_BOOKED");
        assert_eq!(DomainError::MissingStatus("confirmed").code(), "MISSING_STATUS");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::OfferNotFound(OfferId::new()).is_not_found());
        assert!(DomainError::ReservationNotFound(ReservationId::new()).is_not_found());
        assert!(!DomainError::EmailAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::AdminCannotBook.is_authorization());
        assert!(DomainError::CannotBookOwnOffer.is_authorization());
        assert!(!DomainError::UserNotFound(UserId::new()).is_authorization());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::StartInPast.status_code(), 400);
        assert_eq!(DomainError::CannotBookOwnOffer.status_code(), 403);
        assert_eq!(DomainError::ReviewNotFound(ReviewId::new()).status_code(), 404);
        assert_eq!(DomainError::SlotAlreadyBooked.status_code(), 409);
        assert_eq!(DomainError::MissingStatus("confirmed").status_code(), 500);
        assert!(DomainError::MissingStatus("confirmed").is_configuration());
    }

    #[test]
    fn test_offer_type_errors() {
        assert_eq!(DomainError::OfferTypeNotFound(OfferTypeId::new()).status_code(), 404);
        assert_eq!(DomainError::UnknownOfferType(OfferTypeId::new()).status_code(), 400);
        assert_eq!(DomainError::UnknownAmenity("helipad".to_string()).status_code(), 400);
        assert_eq!(DomainError::OfferTypeExists("House".to_string()).status_code(), 409);
        assert_eq!(DomainError::AdminRoleRequired.status_code(), 403);
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::GuestLimitExceeded { requested: 5, max: 4 };
        assert_eq!(err.to_string(), "Guest count 5 exceeds the offer limit of 4");

        assert_eq!(
            DomainError::SlotAlreadyBooked.to_string(),
            "This time slot is already booked"
        );
    }
}
