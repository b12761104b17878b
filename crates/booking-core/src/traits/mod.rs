//! Ports - traits implemented by the infrastructure layer

mod clock;
mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use repositories::{
    OfferQuery, OfferRepository, OfferTypeRepository, RepoResult, ReservationQuery,
    ReservationRepository, ReviewRepository, UserRepository,
};
