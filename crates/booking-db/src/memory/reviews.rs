//! In-memory ReviewRepository

use async_trait::async_trait;

use booking_core::entities::Review;
use booking_core::error::DomainError;
use booking_core::traits::{RepoResult, ReviewRepository};
use booking_core::value_objects::{OfferId, ReviewId};

use super::store::MemoryStore;

#[async_trait]
impl ReviewRepository for MemoryStore {
    async fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        Ok(self.reviews.get(&id).map(|r| r.clone()))
    }

    async fn find_by_offer(&self, offer_id: OfferId, limit: i64, offset: i64) -> RepoResult<Vec<Review>> {
        let mut reviews: Vec<Review> = self
            .reviews
            .iter()
            .filter(|r| r.offer_id == offer_id)
            .map(|r| r.clone())
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.clamp(1, 100)).unwrap_or(100);
        Ok(reviews.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, review: &Review) -> RepoResult<()> {
        if !self.offers.contains_key(&review.offer_id) {
            return Err(DomainError::OfferNotFound(review.offer_id));
        }
        self.reviews.insert(review.id, review.clone());
        Ok(())
    }

    async fn update(&self, review: &Review) -> RepoResult<()> {
        match self.reviews.get_mut(&review.id) {
            Some(mut stored) => {
                stored.rating = review.rating;
                stored.comment.clone_from(&review.comment);
                stored.updated_at = review.updated_at;
                Ok(())
            }
            None => Err(DomainError::ReviewNotFound(review.id)),
        }
    }

    async fn delete(&self, id: ReviewId) -> RepoResult<()> {
        self.reviews
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::ReviewNotFound(id))
    }
}
