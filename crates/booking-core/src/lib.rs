//! # booking-core
//!
//! Domain layer containing entities, value objects, booking rules, repository traits,
//! and domain events. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod booking;
pub mod entities;
pub mod error;
pub mod events;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Offer, OfferType, Reservation, Review, User};
pub use error::DomainError;
pub use events::DomainEvent;
pub use policy::{Actor, Capability, ReservationScope};
pub use traits::{
    Clock, FixedClock, OfferQuery, OfferRepository, OfferTypeRepository, RepoResult,
    ReservationQuery, ReservationRepository, ReviewRepository, SystemClock, UserRepository,
};
pub use value_objects::{
    Amenity, IdParseError, OfferAmenities, OfferDetails, OfferId, OfferTypeId, ReservationId,
    ReservationStatus, ReviewId, Role, StatusCatalog, StayRange, Timeframe, UserId,
};
