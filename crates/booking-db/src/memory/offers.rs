//! In-memory OfferRepository

use async_trait::async_trait;

use booking_core::entities::Offer;
use booking_core::error::DomainError;
use booking_core::traits::{OfferQuery, OfferRepository, RepoResult};
use booking_core::value_objects::{OfferId, UserId};

use super::store::MemoryStore;

impl MemoryStore {
    /// Offers matching every filter of `query`, newest first, unpaginated
    fn matching_offers(&self, query: &OfferQuery) -> Vec<Offer> {
        let mut offers: Vec<Offer> = self
            .offers
            .iter()
            .filter(|offer| query.matches(offer))
            .map(|offer| offer.clone())
            .collect();

        if let Some(range) = &query.available {
            offers.retain(|offer| {
                !self
                    .reservations
                    .iter()
                    .any(|r| r.offer_id == offer.id && r.blocks(range))
            });
        }

        offers.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        offers
    }

    fn check_offer_type(&self, offer: &Offer) -> RepoResult<()> {
        match offer.offer_type_id {
            Some(type_id) if !self.offer_types.contains_key(&type_id) => {
                Err(DomainError::UnknownOfferType(type_id))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl OfferRepository for MemoryStore {
    async fn find_by_id(&self, id: OfferId) -> RepoResult<Option<Offer>> {
        Ok(self.offers.get(&id).map(|offer| offer.clone()))
    }

    async fn search(&self, query: &OfferQuery) -> RepoResult<Vec<Offer>> {
        let offset = usize::try_from(query.offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit.clamp(1, 100)).unwrap_or(100);

        Ok(self
            .matching_offers(query)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn count(&self, query: &OfferQuery) -> RepoResult<i64> {
        Ok(self.matching_offers(query).len() as i64)
    }

    async fn find_by_landlord(&self, landlord_id: UserId) -> RepoResult<Vec<Offer>> {
        let mut offers: Vec<Offer> = self
            .offers
            .iter()
            .filter(|offer| offer.landlord_id == landlord_id)
            .map(|offer| offer.clone())
            .collect();
        offers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(offers)
    }

    async fn create(&self, offer: &Offer) -> RepoResult<()> {
        if !self.users.contains_key(&offer.landlord_id) {
            return Err(DomainError::UserNotFound(offer.landlord_id));
        }
        self.check_offer_type(offer)?;
        self.offers.insert(offer.id, offer.clone());
        Ok(())
    }

    async fn update(&self, offer: &Offer) -> RepoResult<()> {
        self.check_offer_type(offer)?;
        match self.offers.get_mut(&offer.id) {
            Some(mut stored) => {
                *stored = offer.clone();
                Ok(())
            }
            None => Err(DomainError::OfferNotFound(offer.id)),
        }
    }

    async fn delete(&self, id: OfferId) -> RepoResult<()> {
        // wait for in-flight bookings of this offer
        let guard = self.lock_offer(id).await;

        if self.offers.remove(&id).is_none() {
            return Err(DomainError::OfferNotFound(id));
        }
        self.reservations.retain(|_, r| r.offer_id != id);
        self.reviews.retain(|_, r| r.offer_id != id);

        drop(guard);
        self.forget_offer_lock(id);
        Ok(())
    }
}
