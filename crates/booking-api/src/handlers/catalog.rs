//! Catalogue handlers
//!
//! Offer types and the amenity list used to build offer search filters.

use axum::{extract::State, Json};
use booking_core::OfferTypeId;
use booking_service::dto::{AmenityResponse, CreateOfferTypeRequest, OfferTypeResponse};
use booking_service::CatalogService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /offer-types
pub async fn list_offer_types(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<OfferTypeResponse>>> {
    let service = CatalogService::new(state.service_context());
    let response = service.list_offer_types().await?;
    Ok(Json(response))
}

/// GET /offer-types/{offer_type_id}
pub async fn get_offer_type(
    State(state): State<AppState>,
    IdPath(offer_type_id): IdPath<OfferTypeId>,
) -> ApiResult<Json<OfferTypeResponse>> {
    let service = CatalogService::new(state.service_context());
    let response = service.get_offer_type(offer_type_id).await?;
    Ok(Json(response))
}

/// Admins only
///
/// POST /offer-types
pub async fn create_offer_type(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateOfferTypeRequest>,
) -> ApiResult<Created<Json<OfferTypeResponse>>> {
    let service = CatalogService::new(state.service_context());
    let response = service.create_offer_type(&actor, request).await?;
    Ok(Created(Json(response)))
}

/// GET /amenities
pub async fn list_amenities(State(state): State<AppState>) -> Json<Vec<AmenityResponse>> {
    Json(CatalogService::new(state.service_context()).amenities())
}
