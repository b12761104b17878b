//! Review model -> entity mapper

use booking_core::entities::Review;
use booking_core::value_objects::{OfferId, ReviewId, UserId};

use crate::models::ReviewModel;

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: ReviewId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            offer_id: OfferId::from_uuid(model.offer_id),
            rating: model.rating,
            comment: model.comment,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
