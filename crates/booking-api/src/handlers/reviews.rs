//! Review handlers

use axum::{extract::State, Json};
use booking_core::ReviewId;
use booking_service::dto::{ReviewResponse, UpdateReviewRequest};
use booking_service::ReviewService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// PATCH /reviews/{review_id}
pub async fn update_review(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    IdPath(review_id): IdPath<ReviewId>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let service = ReviewService::new(state.service_context());
    let response = service.update_review(&actor, review_id, request).await?;
    Ok(Json(response))
}

/// DELETE /reviews/{review_id}
pub async fn delete_review(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    IdPath(review_id): IdPath<ReviewId>,
) -> ApiResult<NoContent> {
    let service = ReviewService::new(state.service_context());
    service.delete_review(&actor, review_id).await?;
    Ok(NoContent)
}
