//! In-memory ReservationRepository

use async_trait::async_trait;
use chrono::NaiveDate;

use booking_core::booking::availability;
use booking_core::entities::Reservation;
use booking_core::error::DomainError;
use booking_core::traits::{RepoResult, ReservationQuery, ReservationRepository};
use booking_core::value_objects::{OfferId, ReservationId, ReservationStatus, StayRange};

use super::store::MemoryStore;

impl MemoryStore {
    fn reservations_of(&self, offer_id: OfferId) -> Vec<Reservation> {
        self.reservations
            .iter()
            .filter(|r| r.offer_id == offer_id)
            .map(|r| r.clone())
            .collect()
    }
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn has_confirmed_overlap(&self, offer_id: OfferId, range: &StayRange) -> RepoResult<bool> {
        Ok(!availability::is_free(range, &self.reservations_of(offer_id)))
    }

    async fn find_confirmed_in_window(
        &self,
        offer_id: OfferId,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .reservations_of(offer_id)
            .into_iter()
            .filter(|r| r.is_confirmed())
            .filter(|r| r.range.start() <= last_day && r.range.end() >= first_day)
            .collect();
        found.sort_by_key(|r| r.range.start());
        Ok(found)
    }

    async fn create_confirmed(&self, reservation: &Reservation) -> RepoResult<()> {
        let _guard = self.lock_offer(reservation.offer_id).await;

        if !self.offers.contains_key(&reservation.offer_id) {
            return Err(DomainError::OfferNotFound(reservation.offer_id));
        }

        let existing = self.reservations_of(reservation.offer_id);
        if !availability::is_free(&reservation.range, &existing) {
            return Err(DomainError::SlotAlreadyBooked);
        }

        self.reservations.insert(reservation.id, reservation.clone());
        Ok(())
    }

    async fn list(&self, query: &ReservationQuery) -> RepoResult<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| {
                self.landlord_of(r.offer_id)
                    .is_some_and(|landlord| query.matches(r, landlord))
            })
            .map(|r| r.clone())
            .collect();
        found.sort_by(|a, b| {
            a.range
                .start()
                .cmp(&b.range.start())
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(found)
    }

    async fn transition_status(
        &self,
        id: ReservationId,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> RepoResult<bool> {
        Ok(match self.reservations.get_mut(&id) {
            Some(mut r) if r.status == from => {
                r.status = to;
                true
            }
            _ => false,
        })
    }

    async fn has_upcoming_confirmed(&self, offer_id: OfferId, today: NaiveDate) -> RepoResult<bool> {
        Ok(self
            .reservations
            .iter()
            .any(|r| r.offer_id == offer_id && r.is_confirmed() && r.range.end() >= today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::entities::{Offer, User};
    use booking_core::traits::{OfferRepository, UserRepository};
    use booking_core::value_objects::{Role, UserId};
    use std::sync::Arc;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn range(s: u32, e: u32) -> StayRange {
        StayRange::new(date(s), date(e)).unwrap()
    }

    async fn store_with_offer() -> (Arc<MemoryStore>, Offer) {
        let store = MemoryStore::shared();
        let landlord = User::new(
            UserId::new(),
            "host@example.com".to_string(),
            "Host".to_string(),
            String::new(),
            Role::Landlord,
        );
        UserRepository::create(store.as_ref(), &landlord, "hash").await.unwrap();

        let offer = Offer::new(
            OfferId::new(),
            landlord.id,
            "Studio".to_string(),
            String::new(),
            "France".to_string(),
            "Lyon".to_string(),
            "Rue 5".to_string(),
            100,
            2,
        );
        OfferRepository::create(store.as_ref(), &offer).await.unwrap();
        (store, offer)
    }

    #[tokio::test]
    async fn test_overlapping_insert_rejected() {
        let (store, offer) = store_with_offer().await;
        let guest = UserId::new();

        let first = Reservation::confirmed(guest, offer.id, range(1, 5), 1, 400);
        store.create_confirmed(&first).await.unwrap();

        let second = Reservation::confirmed(guest, offer.id, range(4, 6), 1, 200);
        assert!(matches!(
            store.create_confirmed(&second).await,
            Err(DomainError::SlotAlreadyBooked)
        ));

        let touching = Reservation::confirmed(guest, offer.id, range(5, 6), 1, 100);
        assert!(store.create_confirmed(&touching).await.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_bookings_one_wins() {
        let (store, offer) = store_with_offer().await;

        let attempts = (0..8).map(|_| {
            let store = Arc::clone(&store);
            let r = Reservation::confirmed(UserId::new(), offer.id, range(10, 14), 1, 400);
            tokio::spawn(async move { store.create_confirmed(&r).await })
        });

        let results = futures::future::join_all(attempts).await;
        let ok = results.iter().filter(|r| matches!(r, Ok(Ok(())))).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Ok(Err(DomainError::SlotAlreadyBooked))))
            .count();

        assert_eq!(ok, 1);
        assert_eq!(conflicts, 7);
    }

    #[tokio::test]
    async fn test_cancel_frees_slot() {
        let (store, offer) = store_with_offer().await;
        let r = Reservation::confirmed(UserId::new(), offer.id, range(1, 5), 1, 400);
        store.create_confirmed(&r).await.unwrap();

        assert!(store.has_confirmed_overlap(offer.id, &range(2, 3)).await.unwrap());
        assert!(store
            .transition_status(r.id, ReservationStatus::Confirmed, ReservationStatus::Cancelled)
            .await
            .unwrap());
        assert!(!store
            .transition_status(r.id, ReservationStatus::Confirmed, ReservationStatus::Cancelled)
            .await
            .unwrap());
        assert!(!store.has_confirmed_overlap(offer.id, &range(2, 3)).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_offer() {
        let store = MemoryStore::new();
        let r = Reservation::confirmed(UserId::new(), OfferId::new(), range(1, 2), 1, 100);
        assert!(matches!(
            store.create_confirmed(&r).await,
            Err(DomainError::OfferNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_offer_cascades() {
        let (store, offer) = store_with_offer().await;
        let r = Reservation::confirmed(UserId::new(), offer.id, range(1, 5), 1, 400);
        store.create_confirmed(&r).await.unwrap();

        OfferRepository::delete(store.as_ref(), offer.id).await.unwrap();
        assert!(ReservationRepository::find_by_id(store.as_ref(), r.id)
            .await
            .unwrap()
            .is_none());
    }
}
