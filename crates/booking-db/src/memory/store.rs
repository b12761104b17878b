//! Shared state of the in-memory repositories

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use booking_core::entities::{Offer, OfferType, Reservation, Review, User};
use booking_core::value_objects::{OfferId, OfferTypeId, ReservationId, ReviewId, UserId};

/// Types seeded into a new store, matching the schema migration
pub const DEFAULT_OFFER_TYPES: [&str; 5] = ["Apartment", "House", "Room", "Hostel", "Hotel"];

/// Stored user together with its password hash
#[derive(Debug, Clone)]
pub(crate) struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

/// Thread-safe in-memory store implementing all repository traits
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) users: DashMap<UserId, UserRecord>,
    /// Lowercased email -> owner
    pub(crate) emails: DashMap<String, UserId>,
    pub(crate) phones: DashMap<String, UserId>,
    pub(crate) offer_types: DashMap<OfferTypeId, OfferType>,
    pub(crate) offers: DashMap<OfferId, Offer>,
    pub(crate) reservations: DashMap<ReservationId, Reservation>,
    pub(crate) reviews: DashMap<ReviewId, Review>,
    offer_locks: DashMap<OfferId, Arc<Mutex<()>>>,
}

impl MemoryStore {
    /// Create a store holding only the default offer types
    pub fn new() -> Self {
        let store = Self::default();
        for name in DEFAULT_OFFER_TYPES {
            if let Ok(offer_type) = OfferType::new(name) {
                store.offer_types.insert(offer_type.id, offer_type);
            }
        }
        store
    }

    /// Create a fresh store behind an `Arc`, ready to be shared as every repository
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Exclusive booking lock for one offer, held until the guard drops
    pub(crate) async fn lock_offer(&self, offer_id: OfferId) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the map shard is not held while waiting
        let lock = self
            .offer_locks
            .entry(offer_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    pub(crate) fn forget_offer_lock(&self, offer_id: OfferId) {
        self.offer_locks.remove(&offer_id);
    }

    /// Landlord of an offer, if it still exists
    pub(crate) fn landlord_of(&self, offer_id: OfferId) -> Option<UserId> {
        self.offers.get(&offer_id).map(|offer| offer.landlord_id)
    }
}
