//! Reservation handlers
//!
//! Listing, retrieval and cancellation; booking itself lives under
//! `/offers/{offer_id}/reservations`.

use axum::{extract::State, Json};
use booking_core::ReservationId;
use booking_service::dto::{ReservationListParams, ReservationResponse};
use booking_service::ReservationService;

use crate::extractors::{AuthUser, IdPath, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Reservations visible to the caller
///
/// GET /reservations?timeframe&status&date_from&date_to
pub async fn list_reservations(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    QueryParams(params): QueryParams<ReservationListParams>,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.list_reservations(&actor, params).await?;
    Ok(Json(response))
}

/// Upcoming confirmed stays on the caller's offers
///
/// GET /reservations/landlord
pub async fn landlord_reservations(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.landlord_reservations(&actor).await?;
    Ok(Json(response))
}

/// GET /reservations/{reservation_id}
pub async fn get_reservation(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    IdPath(reservation_id): IdPath<ReservationId>,
) -> ApiResult<Json<ReservationResponse>> {
    let service = ReservationService::new(state.service_context());
    let response = service.get_reservation(&actor, reservation_id).await?;
    Ok(Json(response))
}

/// POST /reservations/{reservation_id}/cancel
pub async fn cancel_reservation(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    IdPath(reservation_id): IdPath<ReservationId>,
) -> ApiResult<Json<ReservationResponse>> {
    let service = ReservationService::new(state.service_context());
    let response = service.cancel_reservation(&actor, reservation_id).await?;
    Ok(Json(response))
}
