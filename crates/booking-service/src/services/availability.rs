//! Availability and calendar queries. Read-only.

use booking_core::booking::{blocked_dates, MonthWindow};
use booking_core::{OfferId, StayRange};
use chrono::NaiveDate;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::offer::OfferService;

pub struct AvailabilityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// `false` iff a confirmed reservation overlaps `[start, end)`
    #[instrument(skip(self))]
    pub async fn is_available(
        &self,
        offer_id: OfferId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ServiceResult<bool> {
        let range = StayRange::new(start, end)?;
        let offer = OfferService::new(self.ctx).find_active(offer_id).await?;

        let taken = self
            .ctx
            .reservation_repo()
            .has_confirmed_overlap(offer.id, &range)
            .await?;
        Ok(!taken)
    }

    /// Days blocked by confirmed stays touching the month, check-out day included
    #[instrument(skip(self))]
    pub async fn unavailable_dates(
        &self,
        offer_id: OfferId,
        year: i32,
        month: u32,
    ) -> ServiceResult<Vec<NaiveDate>> {
        let window = MonthWindow::new(year, month)?;
        let offer = OfferService::new(self.ctx).find_active(offer_id).await?;

        let reservations = self
            .ctx
            .reservation_repo()
            .find_confirmed_in_window(offer.id, window.first_day, window.last_day)
            .await?;

        Ok(blocked_dates(&window, &reservations).into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CreateReservationRequest;
    use crate::services::reservation::ReservationService;
    use crate::services::test_support::{add_offer, add_user, date, env};
    use booking_core::{Actor, DomainError, Role};

    async fn book(ctx: &ServiceContext, guest: &Actor, offer: OfferId, s: (u32, u32), e: (u32, u32)) {
        ReservationService::new(ctx)
            .create_reservation(
                guest,
                offer,
                CreateReservationRequest {
                    start_date: date(s.0, s.1),
                    end_date: date(e.0, e.1),
                    guests: 1,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_is_available() {
        let env = env();
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let guest = add_user(&env.ctx, Role::User).await;
        let offer = add_offer(&env.ctx, &landlord, 100, 2).await;
        let service = AvailabilityService::new(&env.ctx);

        assert!(service.is_available(offer.id, date(7, 1), date(7, 5)).await.unwrap());

        book(&env.ctx, &guest, offer.id, (7, 1), (7, 5)).await;
        assert!(!service.is_available(offer.id, date(7, 4), date(7, 6)).await.unwrap());
        assert!(service.is_available(offer.id, date(7, 5), date(7, 6)).await.unwrap());
        assert!(service.is_available(offer.id, date(6, 28), date(7, 1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_available_errors() {
        let env = env();
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let offer = add_offer(&env.ctx, &landlord, 100, 2).await;
        let service = AvailabilityService::new(&env.ctx);

        let err = service.is_available(offer.id, date(7, 5), date(7, 5)).await.unwrap_err();
        assert_eq!(err.error_code(), "INVALID_RANGE");

        let err = service
            .is_available(OfferId::new(), date(7, 1), date(7, 2))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_unavailable_dates_scenario() {
        let env = env();
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let guest = add_user(&env.ctx, Role::User).await;
        let offer = add_offer(&env.ctx, &landlord, 100, 2).await;
        let service = AvailabilityService::new(&env.ctx);

        book(&env.ctx, &guest, offer.id, (7, 1), (7, 5)).await;

        let days = service.unavailable_dates(offer.id, 2025, 7).await.unwrap();
        assert_eq!(days, (1..=5).map(|d| date(7, d)).collect::<Vec<_>>());

        assert!(service.unavailable_dates(offer.id, 2025, 8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stay_crossing_month_end() {
        let env = env();
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let guest = add_user(&env.ctx, Role::User).await;
        let offer = add_offer(&env.ctx, &landlord, 100, 2).await;
        let service = AvailabilityService::new(&env.ctx);

        book(&env.ctx, &guest, offer.id, (7, 30), (8, 2)).await;

        let august = service.unavailable_dates(offer.id, 2025, 8).await.unwrap();
        assert_eq!(august, vec![date(7, 30), date(7, 31), date(8, 1), date(8, 2)]);
    }

    #[tokio::test]
    async fn test_invalid_month() {
        let env = env();
        let landlord = add_user(&env.ctx, Role::Landlord).await;
        let offer = add_offer(&env.ctx, &landlord, 100, 2).await;

        let err = AvailabilityService::new(&env.ctx)
            .unavailable_dates(offer.id, 2025, 13)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::services::error::ServiceError::Domain(DomainError::InvalidMonth(13))
        ));
    }
}
