//! Offer service
//!
//! Offer CRUD and search. Only active offers are listed or bookable; owners
//! and admins still see their inactive ones.

use booking_core::entities::Offer;
use booking_core::traits::OfferQuery;
use booking_core::{Actor, Amenity, DomainError, OfferId, OfferTypeId, StayRange};
use tracing::{info, instrument};

use crate::dto::{
    CreateOfferRequest, OfferResponse, OfferSearchParams, PageRequest, PaginatedResponse,
    UpdateOfferRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct OfferService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OfferService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Offer by id, active or not
    pub(crate) async fn find(&self, offer_id: OfferId) -> ServiceResult<Offer> {
        Ok(self
            .ctx
            .offer_repo()
            .find_by_id(offer_id)
            .await?
            .ok_or(DomainError::OfferNotFound(offer_id))?)
    }

    /// Offer by id; inactive offers count as missing
    pub(crate) async fn find_active(&self, offer_id: OfferId) -> ServiceResult<Offer> {
        let offer = self.find(offer_id).await?;
        if offer.is_active {
            Ok(offer)
        } else {
            Err(DomainError::OfferNotFound(offer_id).into())
        }
    }

    /// Referenced offer types must exist
    async fn check_offer_type(&self, offer_type_id: Option<OfferTypeId>) -> ServiceResult<()> {
        if let Some(type_id) = offer_type_id {
            if self.ctx.offer_type_repo().find_by_id(type_id).await?.is_none() {
                return Err(DomainError::UnknownOfferType(type_id).into());
            }
        }
        Ok(())
    }

    /// Search active offers
    #[instrument(skip(self, params))]
    pub async fn search(
        &self,
        params: OfferSearchParams,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<OfferResponse>> {
        let available = match (params.start, params.end) {
            (Some(start), Some(end)) => Some(StayRange::new(start, end)?),
            (None, None) => None,
            _ => {
                return Err(ServiceError::validation(
                    "start and end must be given together",
                ))
            }
        };
        if let (Some(min), Some(max)) = (params.min_price, params.max_price) {
            if min > max {
                return Err(ServiceError::validation(
                    "min_price cannot be greater than max_price",
                ));
            }
        }

        let amenities = parse_amenities(params.amenities.as_deref())?;

        let query = OfferQuery {
            city: params.city,
            country: params.country,
            min_price: params.min_price,
            max_price: params.max_price,
            guests: params.guests,
            offer_type: params.offer_type,
            amenities,
            available,
            offset: page.offset(),
            limit: i64::from(page.limit),
        };

        let total = self.ctx.offer_repo().count(&query).await?;
        let offers = self.ctx.offer_repo().search(&query).await?;

        Ok(PaginatedResponse::new(
            offers.into_iter().map(OfferResponse::from).collect(),
            page,
            total,
        ))
    }

    /// Single offer. Inactive offers are visible to their owner and admins only.
    #[instrument(skip(self))]
    pub async fn get_offer(&self, actor: Option<&Actor>, offer_id: OfferId) -> ServiceResult<OfferResponse> {
        let offer = self.find(offer_id).await?;
        let privileged = actor.is_some_and(|a| a.ensure_can_manage_offer(&offer).is_ok());
        if !offer.is_active && !privileged {
            return Err(DomainError::OfferNotFound(offer_id).into());
        }
        Ok(offer.into())
    }

    /// Offers owned by the actor, including inactive ones
    #[instrument(skip(self))]
    pub async fn list_own(&self, actor: &Actor) -> ServiceResult<Vec<OfferResponse>> {
        let offers = self.ctx.offer_repo().find_by_landlord(actor.id).await?;
        Ok(offers.into_iter().map(OfferResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(actor = %actor.id))]
    pub async fn create_offer(
        &self,
        actor: &Actor,
        request: CreateOfferRequest,
    ) -> ServiceResult<OfferResponse> {
        actor.ensure_can_create_offer()?;
        request.details.validate()?;
        self.check_offer_type(request.offer_type_id).await?;

        let mut offer = Offer::new(
            OfferId::new(),
            actor.id,
            request.title,
            request.description,
            request.country,
            request.city,
            request.address,
            request.price_per_night,
            request.max_guests,
        );
        offer.offer_type_id = request.offer_type_id;
        offer.province = request.province;
        offer.latitude = request.latitude;
        offer.longitude = request.longitude;
        offer.details = request.details;
        offer.amenities = request.amenities;

        self.ctx.offer_repo().create(&offer).await?;
        info!(offer_id = %offer.id, landlord_id = %actor.id, "Offer created");

        Ok(offer.into())
    }

    #[instrument(skip(self, request), fields(actor = %actor.id))]
    pub async fn update_offer(
        &self,
        actor: &Actor,
        offer_id: OfferId,
        request: UpdateOfferRequest,
    ) -> ServiceResult<OfferResponse> {
        let mut offer = self.find(offer_id).await?;
        actor.ensure_can_manage_offer(&offer)?;

        let UpdateOfferRequest {
            title,
            description,
            country,
            city,
            address,
            province,
            latitude,
            longitude,
            price_per_night,
            max_guests,
            is_active,
            offer_type_id,
            details,
            amenities,
        } = request;

        if let Some(details) = &details {
            details.validate()?;
        }
        self.check_offer_type(offer_type_id).await?;

        if let Some(title) = title {
            offer.title = title;
        }
        if let Some(description) = description {
            offer.description = description;
        }
        if let Some(country) = country {
            offer.country = country;
        }
        if let Some(city) = city {
            offer.city = city;
        }
        if let Some(address) = address {
            offer.address = address;
        }
        if let Some(province) = province {
            offer.province = province;
        }
        if let Some(latitude) = latitude {
            offer.latitude = latitude;
        }
        if let Some(longitude) = longitude {
            offer.longitude = longitude;
        }
        if let Some(type_id) = offer_type_id {
            offer.offer_type_id = Some(type_id);
        }
        if let Some(details) = details {
            offer.details = details;
        }
        if let Some(amenities) = amenities {
            offer.amenities = amenities;
        }
        if let Some(price) = price_per_night {
            offer.price_per_night = price;
        }
        if let Some(max_guests) = max_guests {
            offer.max_guests = max_guests;
        }
        if let Some(active) = is_active {
            offer.is_active = active;
        }
        offer.touch();

        self.ctx.offer_repo().update(&offer).await?;
        info!(offer_id = %offer_id, "Offer updated");

        Ok(offer.into())
    }

    /// Delete an offer. Refused while confirmed stays are still ahead; past
    /// and cancelled reservations are removed with it.
    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn delete_offer(&self, actor: &Actor, offer_id: OfferId) -> ServiceResult<()> {
        let offer = self.find(offer_id).await?;
        actor.ensure_can_manage_offer(&offer)?;

        if self
            .ctx
            .reservation_repo()
            .has_upcoming_confirmed(offer_id, self.ctx.today())
            .await?
        {
            return Err(DomainError::OfferHasUpcomingReservations.into());
        }

        self.ctx.offer_repo().delete(offer_id).await?;
        info!(offer_id = %offer_id, "Offer deleted");
        Ok(())
    }
}

/// `wifi,parking` -> [Wifi, Parking]; blank entries are skipped
fn parse_amenities(raw: Option<&str>) -> ServiceResult<Vec<Amenity>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| {
            key.parse::<Amenity>()
                .map_err(|e| ServiceError::from(DomainError::UnknownAmenity(e.0)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{add_offer, add_user, date, env};
    use booking_core::entities::{OfferType, Reservation};
    use booking_core::{OfferAmenities, OfferDetails, Role};

    fn create_request() -> CreateOfferRequest {
        CreateOfferRequest {
            title: "Cabin".to_string(),
            description: String::new(),
            country: "Norway".to_string(),
            city: "Bergen".to_string(),
            address: "Fjord 2".to_string(),
            province: "Vestland".to_string(),
            latitude: 60.391_3,
            longitude: 5.322_1,
            price_per_night: 150,
            max_guests: 4,
            offer_type_id: None,
            details: OfferDetails::default(),
            amenities: OfferAmenities::default(),
        }
    }

    #[test]
    fn test_parse_amenities() {
        assert!(parse_amenities(None).unwrap().is_empty());
        assert_eq!(
            parse_amenities(Some("wifi, parking,")).unwrap(),
            vec![Amenity::Wifi, Amenity::Parking]
        );
        let err = parse_amenities(Some("wifi,helipad")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_AMENITY");
    }

    #[tokio::test]
    async fn test_create_with_type_details_and_amenities() {
        let env = env();
        let service = OfferService::new(&env.ctx);
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let cabin = OfferType::new("Cabin").unwrap();
        env.ctx.offer_type_repo().create(&cabin).await.unwrap();

        let mut request = create_request();
        request.offer_type_id = Some(cabin.id);
        request.details = OfferDetails { rooms: 3, beds: 2, double_beds: 1, sofa_beds: 1 };
        request.amenities.sauna = true;
        let offer = service.create_offer(&landlord, request).await.unwrap();
        assert_eq!(offer.offer_type_id, Some(cabin.id));
        assert_eq!(offer.province, "Vestland");
        assert_eq!(offer.details.rooms, 3);
        assert!(offer.amenities.sauna);

        let mut unknown = create_request();
        unknown.offer_type_id = Some(booking_core::OfferTypeId::new());
        let err = service.create_offer(&landlord, unknown).await.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_OFFER_TYPE");

        let mut roomless = create_request();
        roomless.details.rooms = 0;
        let err = service.create_offer(&landlord, roomless).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_search_by_type_and_amenities() {
        let env = env();
        let service = OfferService::new(&env.ctx);
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let house = OfferType::new("Chalet").unwrap();
        env.ctx.offer_type_repo().create(&house).await.unwrap();

        let plain = add_offer(&env.ctx, &landlord, 100, 2).await;
        let mut request = create_request();
        request.offer_type_id = Some(house.id);
        request.amenities = OfferAmenities::from_keys(["wifi", "parking"]);
        let equipped = service.create_offer(&landlord, request).await.unwrap();

        let by_type = OfferSearchParams {
            offer_type: Some(house.id),
            ..OfferSearchParams::default()
        };
        let page = service.search(by_type, PageRequest::default()).await.unwrap();
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.data[0].id, equipped.id);

        let wifi = OfferSearchParams {
            amenities: Some("wifi".to_string()),
            ..OfferSearchParams::default()
        };
        let page = service.search(wifi, PageRequest::default()).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_ne!(page.data[0].id, plain.id);

        let both = OfferSearchParams {
            amenities: Some("wifi,sauna".to_string()),
            ..OfferSearchParams::default()
        };
        let page = service.search(both, PageRequest::default()).await.unwrap();
        assert_eq!(page.pagination.total, 0);
    }

    #[tokio::test]
    async fn test_only_landlords_and_admins_create() {
        let env = env();
        let service = OfferService::new(&env.ctx);

        let user = add_user(&env.ctx, Role::User).await;
        let err = service.create_offer(&user, create_request()).await.unwrap_err();
        assert_eq!(err.status_code(), 403);

        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let offer = service.create_offer(&landlord, create_request()).await.unwrap();
        assert_eq!(offer.landlord_id, landlord.id);

        let admin = add_user(&env.ctx, Role::Admin).await;
        assert!(service.create_offer(&admin, create_request()).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_requires_owner() {
        let env = env();
        let service = OfferService::new(&env.ctx);
        let owner = add_user(&env.ctx, Role::Landlord).await;
        let other = add_user(&env.ctx, Role::Landlord).await;
        let offer = add_offer(&env.ctx, &owner, 100, 2).await;

        let request = UpdateOfferRequest {
            price_per_night: Some(120),
            ..UpdateOfferRequest::default()
        };
        let err = service
            .update_offer(&other, offer.id, request.clone())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_OFFER_OWNER");

        let updated = service.update_offer(&owner, offer.id, request).await.unwrap();
        assert_eq!(updated.price_per_night, 120);
    }

    #[tokio::test]
    async fn test_inactive_offer_hidden_from_others() {
        let env = env();
        let service = OfferService::new(&env.ctx);
        let owner = add_user(&env.ctx, Role::Landlord).await;
        let guest = add_user(&env.ctx, Role::User).await;
        let offer = add_offer(&env.ctx, &owner, 100, 2).await;

        let deactivate = UpdateOfferRequest {
            is_active: Some(false),
            ..UpdateOfferRequest::default()
        };
        service.update_offer(&owner, offer.id, deactivate).await.unwrap();

        assert!(service.get_offer(Some(&owner), offer.id).await.is_ok());
        let err = service.get_offer(Some(&guest), offer.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert!(service.get_offer(None, offer.id).await.is_err());

        let page = service
            .search(OfferSearchParams::default(), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 0);
    }

    #[tokio::test]
    async fn test_search_filters_and_availability() {
        let env = env();
        let service = OfferService::new(&env.ctx);
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let guest = add_user(&env.ctx, Role::User).await;
        let cheap = add_offer(&env.ctx, &landlord, 80, 2).await;
        let pricey = add_offer(&env.ctx, &landlord, 300, 6).await;

        let range = StayRange::new(date(7, 10), date(7, 12)).unwrap();
        let booked = Reservation::confirmed(guest.id, pricey.id, range, 2, 600);
        env.ctx.reservation_repo().create_confirmed(&booked).await.unwrap();

        let params = OfferSearchParams {
            city: Some("krakow".to_string()),
            guests: Some(2),
            ..OfferSearchParams::default()
        };
        let page = service.search(params.clone(), PageRequest::default()).await.unwrap();
        assert_eq!(page.pagination.total, 2);

        let free = OfferSearchParams {
            start: Some(date(7, 11)),
            end: Some(date(7, 13)),
            ..params
        };
        let page = service.search(free, PageRequest::default()).await.unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, cheap.id);

        let half = OfferSearchParams {
            start: Some(date(7, 11)),
            ..OfferSearchParams::default()
        };
        assert!(service.search(half, PageRequest::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_search_pagination() {
        let env = env();
        let service = OfferService::new(&env.ctx);
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        for _ in 0..5 {
            add_offer(&env.ctx, &landlord, 100, 2).await;
        }

        let page = service
            .search(OfferSearchParams::default(), PageRequest::new(Some(2), Some(2)))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total, 5);
        assert!(page.pagination.has_more);
    }

    #[tokio::test]
    async fn test_delete_refused_with_upcoming_stays() {
        let env = env();
        let service = OfferService::new(&env.ctx);
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let guest = add_user(&env.ctx, Role::User).await;
        let offer = add_offer(&env.ctx, &landlord, 100, 2).await;

        let range = StayRange::new(date(7, 20), date(7, 22)).unwrap();
        let r = Reservation::confirmed(guest.id, offer.id, range, 1, 200);
        env.ctx.reservation_repo().create_confirmed(&r).await.unwrap();

        let err = service.delete_offer(&landlord, offer.id).await.unwrap_err();
        assert_eq!(err.error_code(), "OFFER_HAS_UPCOMING_RESERVATIONS");

        env.ctx
            .reservation_repo()
            .transition_status(
                r.id,
                booking_core::ReservationStatus::Confirmed,
                booking_core::ReservationStatus::Cancelled,
            )
            .await
            .unwrap();
        service.delete_offer(&landlord, offer.id).await.unwrap();
        assert!(env.ctx.reservation_repo().find_by_id(r.id).await.unwrap().is_none());
    }
}
