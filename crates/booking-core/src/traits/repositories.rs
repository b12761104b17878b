//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL and in-memory).

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Offer, OfferType, Reservation, Review, User};
use crate::error::DomainError;
use crate::policy::ReservationScope;
use crate::value_objects::{
    Amenity, OfferId, OfferTypeId, ReservationId, ReservationStatus, ReviewId, StayRange,
    Timeframe, UserId,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if phone number is already taken
    async fn phone_exists(&self, phone: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Offer Repository
// ============================================================================

/// Filters for offer search. Only active offers are ever returned.
#[derive(Debug, Clone, Default)]
pub struct OfferQuery {
    pub city: Option<String>,
    pub country: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    /// Minimum capacity
    pub guests: Option<i32>,
    pub offer_type: Option<OfferTypeId>,
    /// Every listed amenity must be provided
    pub amenities: Vec<Amenity>,
    /// Exclude offers with a confirmed reservation overlapping this range
    pub available: Option<StayRange>,
    pub offset: i64,
    pub limit: i64,
}

impl OfferQuery {
    /// Attribute filters, everything except `available`
    pub fn matches(&self, offer: &Offer) -> bool {
        offer.is_active
            && self
                .city
                .as_deref()
                .is_none_or(|c| offer.city.eq_ignore_ascii_case(c))
            && self
                .country
                .as_deref()
                .is_none_or(|c| offer.country.eq_ignore_ascii_case(c))
            && self.min_price.is_none_or(|p| offer.price_per_night >= p)
            && self.max_price.is_none_or(|p| offer.price_per_night <= p)
            && self.guests.is_none_or(|g| offer.max_guests >= g)
            && self
                .offer_type
                .is_none_or(|t| offer.offer_type_id == Some(t))
            && offer.amenities.has_all(&self.amenities)
    }
}

#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Find offer by ID, active or not
    async fn find_by_id(&self, id: OfferId) -> RepoResult<Option<Offer>>;

    /// Search active offers, newest first
    async fn search(&self, query: &OfferQuery) -> RepoResult<Vec<Offer>>;

    /// Total number of offers matching `query`, ignoring offset/limit
    async fn count(&self, query: &OfferQuery) -> RepoResult<i64>;

    /// Offers owned by a landlord
    async fn find_by_landlord(&self, landlord_id: UserId) -> RepoResult<Vec<Offer>>;

    /// Create a new offer
    async fn create(&self, offer: &Offer) -> RepoResult<()>;

    /// Update an existing offer
    async fn update(&self, offer: &Offer) -> RepoResult<()>;

    /// Delete an offer together with its reservations and reviews
    async fn delete(&self, id: OfferId) -> RepoResult<()>;
}

// ============================================================================
// Offer Type Repository
// ============================================================================

#[async_trait]
pub trait OfferTypeRepository: Send + Sync {
    /// All types, by name
    async fn list(&self) -> RepoResult<Vec<OfferType>>;

    async fn find_by_id(&self, id: OfferTypeId) -> RepoResult<Option<OfferType>>;

    /// Create a type. Names are unique ignoring case (`OfferTypeExists`).
    async fn create(&self, offer_type: &OfferType) -> RepoResult<()>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

/// Filters for reservation listing
#[derive(Debug, Clone, Copy)]
pub struct ReservationQuery {
    pub scope: ReservationScope,
    pub timeframe: Timeframe,
    pub today: NaiveDate,
    pub status: Option<ReservationStatus>,
    /// Stays ending on or after this day
    pub date_from: Option<NaiveDate>,
    /// Stays starting on or before this day
    pub date_to: Option<NaiveDate>,
}

impl ReservationQuery {
    /// Unfiltered upcoming listing for a scope
    pub fn upcoming(scope: ReservationScope, today: NaiveDate) -> Self {
        Self {
            scope,
            timeframe: Timeframe::Upcoming,
            today,
            status: None,
            date_from: None,
            date_to: None,
        }
    }

    pub fn matches(&self, reservation: &Reservation, offer_landlord: UserId) -> bool {
        self.scope.admits(reservation, offer_landlord)
            && self.timeframe.includes(reservation.range.end(), self.today)
            && self.status.is_none_or(|s| reservation.status == s)
            && self.date_from.is_none_or(|d| reservation.range.end() >= d)
            && self.date_to.is_none_or(|d| reservation.range.start() <= d)
    }
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID
    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>>;

    /// Whether a confirmed reservation on the offer overlaps `range`
    async fn has_confirmed_overlap(&self, offer_id: OfferId, range: &StayRange) -> RepoResult<bool>;

    /// Confirmed reservations on the offer touching `[first_day, last_day]`
    async fn find_confirmed_in_window(
        &self,
        offer_id: OfferId,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> RepoResult<Vec<Reservation>>;

    /// Insert a confirmed reservation unless it overlaps an existing one.
    ///
    /// The overlap check and the insert are atomic with respect to other
    /// calls for the same offer. Fails with `SlotAlreadyBooked` on overlap
    /// and `OfferNotFound` if the offer vanished.
    async fn create_confirmed(&self, reservation: &Reservation) -> RepoResult<()>;

    /// Reservations matching `query`, soonest first
    async fn list(&self, query: &ReservationQuery) -> RepoResult<Vec<Reservation>>;

    /// Change status only if it currently equals `from`. Returns whether a row changed.
    async fn transition_status(
        &self,
        id: ReservationId,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> RepoResult<bool>;

    /// Whether the offer has confirmed stays ending on or after `today`
    async fn has_upcoming_confirmed(&self, offer_id: OfferId, today: NaiveDate) -> RepoResult<bool>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Find review by ID
    async fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>>;

    /// Reviews of an offer, newest first
    async fn find_by_offer(&self, offer_id: OfferId, limit: i64, offset: i64) -> RepoResult<Vec<Review>>;

    /// Create a new review
    async fn create(&self, review: &Review) -> RepoResult<()>;

    /// Update rating and comment
    async fn update(&self, review: &Review) -> RepoResult<()>;

    /// Delete a review
    async fn delete(&self, id: ReviewId) -> RepoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Role;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn offer() -> Offer {
        Offer::new(
            OfferId::new(),
            UserId::new(),
            "House".to_string(),
            String::new(),
            "Italy".to_string(),
            "Rome".to_string(),
            "Via 1".to_string(),
            120,
            3,
        )
    }

    #[test]
    fn test_offer_query_filters() {
        let o = offer();
        let query = OfferQuery {
            city: Some("rome".to_string()),
            min_price: Some(100),
            guests: Some(3),
            ..OfferQuery::default()
        };
        assert!(query.matches(&o));

        let too_many = OfferQuery { guests: Some(4), ..OfferQuery::default() };
        assert!(!too_many.matches(&o));

        let typed = OfferTypeId::new();
        let wrong_type = OfferQuery { offer_type: Some(typed), ..OfferQuery::default() };
        assert!(!wrong_type.matches(&o));

        let mut o = o;
        o.offer_type_id = Some(typed);
        o.amenities.wifi = true;
        let wifi_of_type = OfferQuery {
            offer_type: Some(typed),
            amenities: vec![Amenity::Wifi],
            ..OfferQuery::default()
        };
        assert!(wifi_of_type.matches(&o));

        let sauna = OfferQuery {
            amenities: vec![Amenity::Wifi, Amenity::Sauna],
            ..OfferQuery::default()
        };
        assert!(!sauna.matches(&o));

        let mut inactive = o.clone();
        inactive.is_active = false;
        assert!(!OfferQuery::default().matches(&inactive));
    }

    #[test]
    fn test_reservation_query_timeframe() {
        let guest = crate::policy::Actor::new(UserId::new(), Role::User);
        let range = StayRange::new(date(1), date(5)).unwrap();
        let r = Reservation::confirmed(guest.id, OfferId::new(), range, 1, 0);
        let landlord = UserId::new();

        let upcoming = ReservationQuery::upcoming(guest.reservation_scope(), date(5));
        assert!(upcoming.matches(&r, landlord));

        let later = ReservationQuery::upcoming(guest.reservation_scope(), date(6));
        assert!(!later.matches(&r, landlord));

        let past = ReservationQuery { timeframe: Timeframe::Past, ..later };
        assert!(past.matches(&r, landlord));
    }

    #[test]
    fn test_reservation_query_date_bounds() {
        let guest = UserId::new();
        let range = StayRange::new(date(10), date(12)).unwrap();
        let r = Reservation::confirmed(guest, OfferId::new(), range, 1, 0);
        let base = ReservationQuery {
            timeframe: Timeframe::All,
            ..ReservationQuery::upcoming(ReservationScope::All, date(1))
        };

        assert!(ReservationQuery { date_from: Some(date(12)), ..base }.matches(&r, guest));
        assert!(!ReservationQuery { date_from: Some(date(13)), ..base }.matches(&r, guest));
        assert!(ReservationQuery { date_to: Some(date(10)), ..base }.matches(&r, guest));
        assert!(!ReservationQuery { date_to: Some(date(9)), ..base }.matches(&r, guest));
        assert!(!ReservationQuery {
            status: Some(ReservationStatus::Cancelled),
            ..base
        }
        .matches(&r, guest));
    }
}
