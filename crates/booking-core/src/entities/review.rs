//! Review entity - a guest's rating of an offer

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{OfferId, ReviewId, UserId};

/// Lowest and highest accepted rating
pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub offer_id: OfferId,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Create a review, validating the rating
    pub fn new(
        user_id: UserId,
        offer_id: OfferId,
        rating: i32,
        comment: String,
    ) -> Result<Self, DomainError> {
        Self::check_rating(rating)?;
        let now = Utc::now();
        Ok(Self {
            id: ReviewId::new(),
            user_id,
            offer_id,
            rating,
            comment,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn check_rating(rating: i32) -> Result<(), DomainError> {
        if RATING_RANGE.contains(&rating) {
            Ok(())
        } else {
            Err(DomainError::InvalidRating(rating))
        }
    }

    pub fn edit(&mut self, rating: Option<i32>, comment: Option<String>) -> Result<(), DomainError> {
        if let Some(rating) = rating {
            Self::check_rating(rating)?;
            self.rating = rating;
        }
        if let Some(comment) = comment {
            self.comment = comment;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}
