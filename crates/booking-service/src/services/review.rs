//! Review service

use booking_core::entities::Review;
use booking_core::{Actor, DomainError, OfferId, ReviewId};
use tracing::{info, instrument};

use crate::dto::{CreateReviewRequest, PageRequest, ReviewResponse, UpdateReviewRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::offer::OfferService;

pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reviews of an offer, newest first
    #[instrument(skip(self))]
    pub async fn list_for_offer(
        &self,
        offer_id: OfferId,
        page: PageRequest,
    ) -> ServiceResult<Vec<ReviewResponse>> {
        OfferService::new(self.ctx).find_active(offer_id).await?;
        let reviews = self
            .ctx
            .review_repo()
            .find_by_offer(offer_id, i64::from(page.limit), page.offset())
            .await?;
        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }

    /// Any authenticated user may review an active offer
    #[instrument(skip(self, request), fields(actor = %actor.id))]
    pub async fn create_review(
        &self,
        actor: &Actor,
        offer_id: OfferId,
        request: CreateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let offer = OfferService::new(self.ctx).find_active(offer_id).await?;
        let review = Review::new(actor.id, offer.id, request.rating, request.comment)?;

        self.ctx.review_repo().create(&review).await?;
        info!(review_id = %review.id, offer_id = %offer_id, "Review created");

        Ok(review.into())
    }

    #[instrument(skip(self, request), fields(actor = %actor.id))]
    pub async fn update_review(
        &self,
        actor: &Actor,
        review_id: ReviewId,
        request: UpdateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let mut review = self.find(review_id).await?;
        actor.ensure_can_manage_review(&review)?;

        review.edit(request.rating, request.comment)?;
        self.ctx.review_repo().update(&review).await?;

        Ok(review.into())
    }

    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn delete_review(&self, actor: &Actor, review_id: ReviewId) -> ServiceResult<()> {
        let review = self.find(review_id).await?;
        actor.ensure_can_manage_review(&review)?;

        self.ctx.review_repo().delete(review_id).await?;
        info!(review_id = %review_id, "Review deleted");
        Ok(())
    }

    async fn find(&self, review_id: ReviewId) -> ServiceResult<Review> {
        Ok(self
            .ctx
            .review_repo()
            .find_by_id(review_id)
            .await?
            .ok_or(DomainError::ReviewNotFound(review_id))?)
    }
}
