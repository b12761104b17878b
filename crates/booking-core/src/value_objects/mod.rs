//! Value objects - immutable types that represent domain concepts

mod amenity;
mod ids;
mod offer_details;
mod reservation_status;
mod role;
mod stay_range;
mod timeframe;

pub use amenity::{Amenity, OfferAmenities, UnknownAmenity};
pub use ids::{IdParseError, OfferId, OfferTypeId, ReservationId, ReviewId, UserId};
pub use offer_details::OfferDetails;
pub use reservation_status::{ReservationStatus, StatusCatalog};
pub use role::{Role, UnknownRole};
pub use stay_range::StayRange;
pub use timeframe::Timeframe;
