//! Reservation service
//!
//! The booking transaction plus listing, retrieval and cancellation. Every
//! read goes through the actor's [`ReservationScope`](booking_core::ReservationScope);
//! a reservation outside it is reported as missing.

use booking_core::booking::{authorize_booker, total_price, validate_against_offer, validate_stay};
use booking_core::entities::{Offer, Reservation};
use booking_core::events::{ReservationCancelledEvent, ReservationConfirmedEvent};
use booking_core::traits::ReservationQuery;
use booking_core::{
    Actor, DomainError, DomainEvent, OfferId, ReservationId, ReservationScope, ReservationStatus,
    Timeframe,
};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{CreateReservationRequest, ReservationListParams, ReservationResponse};
use crate::notifications::Notification;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::offer::OfferService;

pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Book `[start_date, end_date)` on an offer.
    ///
    /// Checks run in order and the first failure wins: admin role, date
    /// range, offer lookup, guest count, own offer. The overlap check and the
    /// insert are one atomic step in the repository.
    #[instrument(skip(self, request), fields(actor = %actor.id, start = %request.start_date, end = %request.end_date))]
    pub async fn create_reservation(
        &self,
        actor: &Actor,
        offer_id: OfferId,
        request: CreateReservationRequest,
    ) -> ServiceResult<ReservationResponse> {
        authorize_booker(actor)?;
        let range = validate_stay(request.start_date, request.end_date, self.ctx.today())?;

        let offer = OfferService::new(self.ctx).find_active(offer_id).await?;
        validate_against_offer(actor, &offer, request.guests)?;

        let price = total_price(offer.price_per_night, &range)?;
        let reservation = Reservation::confirmed(actor.id, offer.id, range, request.guests, price);

        self.ctx.reservation_repo().create_confirmed(&reservation).await?;
        info!(
            reservation_id = %reservation.id,
            offer_id = %offer.id,
            nights = range.nights(),
            total_price = price,
            "Reservation confirmed"
        );

        let event = DomainEvent::ReservationConfirmed(ReservationConfirmedEvent {
            reservation_id: reservation.id,
            offer_id: offer.id,
            guest_id: actor.id,
            offer_title: offer.title.clone(),
            start_date: range.start(),
            end_date: range.end(),
            guests: reservation.guests,
            total_price: price,
            timestamp: Utc::now(),
        });
        self.notify_guest(&event);

        Ok(reservation.into())
    }

    /// Reservations visible to the actor
    #[instrument(skip(self, params), fields(actor = %actor.id, timeframe = params.timeframe.as_str()))]
    pub async fn list_reservations(
        &self,
        actor: &Actor,
        params: ReservationListParams,
    ) -> ServiceResult<Vec<ReservationResponse>> {
        let today = self.ctx.today();
        params
            .timeframe
            .validate_filters(params.date_from, params.date_to, today)?;
        let status = params
            .status
            .as_deref()
            .map(str::parse::<ReservationStatus>)
            .transpose()?;

        let query = ReservationQuery {
            scope: actor.reservation_scope(),
            timeframe: params.timeframe,
            today,
            status,
            date_from: params.date_from,
            date_to: params.date_to,
        };
        self.run_query(&query).await
    }

    /// Upcoming confirmed stays on the actor's own offers
    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn landlord_reservations(&self, actor: &Actor) -> ServiceResult<Vec<ReservationResponse>> {
        actor.ensure_can_create_offer()?;

        let query = ReservationQuery {
            status: Some(ReservationStatus::Confirmed),
            timeframe: Timeframe::Upcoming,
            ..ReservationQuery::upcoming(ReservationScope::OnOffersOf(actor.id), self.ctx.today())
        };
        self.run_query(&query).await
    }

    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn get_reservation(
        &self,
        actor: &Actor,
        reservation_id: ReservationId,
    ) -> ServiceResult<ReservationResponse> {
        let (reservation, _) = self.find_visible(actor, reservation_id).await?;
        Ok(reservation.into())
    }

    /// Move a confirmed reservation to cancelled, freeing its dates
    #[instrument(skip(self), fields(actor = %actor.id))]
    pub async fn cancel_reservation(
        &self,
        actor: &Actor,
        reservation_id: ReservationId,
    ) -> ServiceResult<ReservationResponse> {
        let (mut reservation, offer) = self.find_visible(actor, reservation_id).await?;
        if !actor.can_cancel(&reservation, &offer) {
            return Err(DomainError::NotReservationParticipant.into());
        }

        reservation.cancel()?;
        let changed = self
            .ctx
            .reservation_repo()
            .transition_status(
                reservation_id,
                ReservationStatus::Confirmed,
                ReservationStatus::Cancelled,
            )
            .await?;
        if !changed {
            // cancelled concurrently
            return Err(DomainError::AlreadyCancelled.into());
        }
        info!(reservation_id = %reservation_id, cancelled_by = %actor.id, "Reservation cancelled");

        let event = DomainEvent::ReservationCancelled(ReservationCancelledEvent {
            reservation_id,
            offer_id: offer.id,
            guest_id: reservation.user_id,
            cancelled_by: actor.id,
            offer_title: offer.title,
            start_date: reservation.range.start(),
            end_date: reservation.range.end(),
            timestamp: Utc::now(),
        });
        self.notify_guest(&event);

        Ok(reservation.into())
    }

    async fn run_query(&self, query: &ReservationQuery) -> ServiceResult<Vec<ReservationResponse>> {
        let found = self.ctx.reservation_repo().list(query).await?;
        Ok(found.iter().map(ReservationResponse::from).collect())
    }

    /// Reservation and its offer, or not-found if the actor may not see it
    async fn find_visible(
        &self,
        actor: &Actor,
        reservation_id: ReservationId,
    ) -> ServiceResult<(Reservation, Offer)> {
        let not_found = || DomainError::ReservationNotFound(reservation_id);

        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(not_found)?;
        let offer = self
            .ctx
            .offer_repo()
            .find_by_id(reservation.offer_id)
            .await?
            .ok_or_else(not_found)?;

        if actor.can_view_reservation(&reservation, &offer) {
            Ok((reservation, offer))
        } else {
            Err(not_found().into())
        }
    }

    /// Queue a notification for the guest. The worker resolves the address,
    /// so this never waits and never fails the caller.
    fn notify_guest(&self, event: &DomainEvent) {
        self.ctx.notifications().dispatch(Notification::for_event(event));
    }
}
