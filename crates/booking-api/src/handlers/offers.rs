//! Offer handlers
//!
//! Offer CRUD and search, plus the per-offer availability, calendar,
//! booking and review endpoints.

use axum::{extract::State, Json};
use booking_core::OfferId;
use booking_service::dto::{
    AvailabilityParams, AvailabilityResponse, CalendarParams, CreateOfferRequest,
    CreateReservationRequest, CreateReviewRequest, OfferResponse, OfferSearchParams,
    PaginatedResponse, ReservationResponse, ReviewResponse, UpdateOfferRequest,
};
use booking_service::{AvailabilityService, OfferService, ReservationService, ReviewService};
use chrono::NaiveDate;

use crate::extractors::{AuthUser, IdPath, OptionalAuthUser, Pagination, QueryParams, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Search active offers
///
/// GET /offers
pub async fn search_offers(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<OfferSearchParams>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<OfferResponse>>> {
    let service = OfferService::new(state.service_context());
    let response = service.search(params, page).await?;
    Ok(Json(response))
}

/// POST /offers
pub async fn create_offer(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateOfferRequest>,
) -> ApiResult<Created<Json<OfferResponse>>> {
    let service = OfferService::new(state.service_context());
    let response = service.create_offer(&actor, request).await?;
    Ok(Created(Json(response)))
}

/// Anonymous callers only see active offers
///
/// GET /offers/{offer_id}
pub async fn get_offer(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    IdPath(offer_id): IdPath<OfferId>,
) -> ApiResult<Json<OfferResponse>> {
    let service = OfferService::new(state.service_context());
    let response = service.get_offer(auth.actor(), offer_id).await?;
    Ok(Json(response))
}

/// PATCH /offers/{offer_id}
pub async fn update_offer(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    IdPath(offer_id): IdPath<OfferId>,
    ValidatedJson(request): ValidatedJson<UpdateOfferRequest>,
) -> ApiResult<Json<OfferResponse>> {
    let service = OfferService::new(state.service_context());
    let response = service.update_offer(&actor, offer_id, request).await?;
    Ok(Json(response))
}

/// DELETE /offers/{offer_id}
pub async fn delete_offer(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    IdPath(offer_id): IdPath<OfferId>,
) -> ApiResult<NoContent> {
    let service = OfferService::new(state.service_context());
    service.delete_offer(&actor, offer_id).await?;
    Ok(NoContent)
}

/// GET /offers/{offer_id}/check-availability?start&end
pub async fn check_availability(
    State(state): State<AppState>,
    IdPath(offer_id): IdPath<OfferId>,
    QueryParams(params): QueryParams<AvailabilityParams>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let service = AvailabilityService::new(state.service_context());
    let available = service.is_available(offer_id, params.start, params.end).await?;
    Ok(Json(AvailabilityResponse { available }))
}

/// GET /offers/{offer_id}/unavailable-dates?year&month
pub async fn unavailable_dates(
    State(state): State<AppState>,
    IdPath(offer_id): IdPath<OfferId>,
    QueryParams(params): QueryParams<CalendarParams>,
) -> ApiResult<Json<Vec<NaiveDate>>> {
    let service = AvailabilityService::new(state.service_context());
    let dates = service
        .unavailable_dates(offer_id, params.year, params.month)
        .await?;
    Ok(Json(dates))
}

/// Book a stay
///
/// POST /offers/{offer_id}/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    IdPath(offer_id): IdPath<OfferId>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> ApiResult<Created<Json<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.create_reservation(&actor, offer_id, request).await?;
    Ok(Created(Json(response)))
}

/// Newest first
///
/// GET /offers/{offer_id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    IdPath(offer_id): IdPath<OfferId>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    let response = service.list_for_offer(offer_id, page).await?;
    Ok(Json(response))
}

/// POST /offers/{offer_id}/reviews
pub async fn create_review(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    IdPath(offer_id): IdPath<OfferId>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<Json<ReviewResponse>>> {
    let service = ReviewService::new(state.service_context());
    let response = service.create_review(&actor, offer_id, request).await?;
    Ok(Created(Json(response)))
}
