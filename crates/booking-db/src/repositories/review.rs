//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booking_core::entities::Review;
use booking_core::error::DomainError;
use booking_core::traits::{RepoResult, ReviewRepository};
use booking_core::value_objects::{OfferId, ReviewId};

use crate::models::ReviewModel;

use super::error::{is_foreign_key_violation, map_db_error};

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReviewId) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, user_id, offer_id, rating, comment, created_at, updated_at
            FROM reviews
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn find_by_offer(&self, offer_id: OfferId, limit: i64, offset: i64) -> RepoResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, user_id, offer_id, rating, comment, created_at, updated_at
            FROM reviews
            WHERE offer_id = $1
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(offer_id.into_inner())
        .bind(limit.clamp(1, 100))
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn create(&self, review: &Review) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO reviews (id, user_id, offer_id, rating, comment, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(review.id.into_inner())
        .bind(review.user_id.into_inner())
        .bind(review.offer_id.into_inner())
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::OfferNotFound(review.offer_id)
            } else {
                map_db_error(e)
            }
        })?;

        Ok(())
    }

    #[instrument(skip(self, review), fields(review_id = %review.id))]
    async fn update(&self, review: &Review) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE reviews SET rating = $2, comment = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(review.id.into_inner())
        .bind(review.rating)
        .bind(&review.comment)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReviewNotFound(review.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ReviewId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReviewNotFound(id));
        }

        Ok(())
    }
}
