//! User handlers

use axum::{extract::State, Json};
use booking_service::dto::{OfferResponse, UpdateUserRequest, UserResponse};
use booking_service::{OfferService, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(actor.id).await?;
    Ok(Json(response))
}

/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_current_user(actor.id, request).await?;
    Ok(Json(response))
}

/// Offers owned by the caller, inactive ones included
///
/// GET /users/@me/offers
pub async fn get_current_user_offers(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> ApiResult<Json<Vec<OfferResponse>>> {
    let service = OfferService::new(state.service_context());
    let response = service.list_own(&actor).await?;
    Ok(Json(response))
}
