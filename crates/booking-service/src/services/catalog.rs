//! Offer catalogue service
//!
//! Offer types (admin-curated) and the fixed amenity list that clients use
//! to build search filters.

use booking_core::entities::OfferType;
use booking_core::{Actor, Amenity, DomainError, OfferTypeId};
use tracing::{info, instrument};

use crate::dto::{AmenityResponse, CreateOfferTypeRequest, OfferTypeResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_offer_types(&self) -> ServiceResult<Vec<OfferTypeResponse>> {
        let types = self.ctx.offer_type_repo().list().await?;
        Ok(types.into_iter().map(OfferTypeResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_offer_type(&self, id: OfferTypeId) -> ServiceResult<OfferTypeResponse> {
        let offer_type = self
            .ctx
            .offer_type_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::OfferTypeNotFound(id))?;
        Ok(offer_type.into())
    }

    #[instrument(skip(self, request), fields(actor = %actor.id))]
    pub async fn create_offer_type(
        &self,
        actor: &Actor,
        request: CreateOfferTypeRequest,
    ) -> ServiceResult<OfferTypeResponse> {
        actor.ensure_can_manage_offer_types()?;

        let offer_type = OfferType::new(&request.name)?;
        self.ctx.offer_type_repo().create(&offer_type).await?;
        info!(offer_type_id = %offer_type.id, name = %offer_type.name, "Offer type created");

        Ok(offer_type.into())
    }

    pub fn amenities(&self) -> Vec<AmenityResponse> {
        Amenity::ALL.into_iter().map(AmenityResponse::from).collect()
    }
}
