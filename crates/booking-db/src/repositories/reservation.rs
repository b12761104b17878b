//! PostgreSQL implementation of ReservationRepository
//!
//! Booking is serialized per offer: `create_confirmed` locks the offer row
//! (`SELECT ... FOR UPDATE`) before the overlap check, so two concurrent
//! bookings of one offer run one after the other and the second sees the
//! first's row. Bookings of different offers do not contend.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, instrument};

use booking_core::entities::Reservation;
use booking_core::error::DomainError;
use booking_core::policy::ReservationScope;
use booking_core::traits::{RepoResult, ReservationQuery, ReservationRepository};
use booking_core::value_objects::{
    OfferId, ReservationId, ReservationStatus, StatusCatalog, StayRange,
};
use uuid::Uuid;

use crate::mappers::reservation_from_model;
use crate::models::ReservationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
    catalog: Arc<StatusCatalog>,
}

impl PgReservationRepository {
    /// Create a new PgReservationRepository
    pub fn new(pool: PgPool, catalog: Arc<StatusCatalog>) -> Self {
        Self { pool, catalog }
    }

    fn confirmed_id(&self) -> i32 {
        self.catalog.id_of(ReservationStatus::Confirmed)
    }

    fn to_entities(&self, rows: Vec<ReservationModel>) -> RepoResult<Vec<Reservation>> {
        rows.into_iter()
            .map(|row| reservation_from_model(row, &self.catalog))
            .collect()
    }
}

/// `(guest, landlord)` parameters of the scope predicate in `list`
fn scope_params(scope: ReservationScope) -> (Option<Uuid>, Option<Uuid>) {
    match scope {
        ReservationScope::All => (None, None),
        ReservationScope::GuestOrLandlord(id) => (Some(id.into_inner()), Some(id.into_inner())),
        ReservationScope::Guest(id) => (Some(id.into_inner()), None),
        ReservationScope::OnOffersOf(id) => (None, Some(id.into_inner())),
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, user_id, offer_id, start_date, end_date, guests, total_price,
                   status_id, created_at
            FROM reservations
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(|row| reservation_from_model(row, &self.catalog))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn has_confirmed_overlap(&self, offer_id: OfferId, range: &StayRange) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE offer_id = $1 AND status_id = $2
                  AND start_date < $4 AND end_date > $3
            )
            ",
        )
        .bind(offer_id.into_inner())
        .bind(self.confirmed_id())
        .bind(range.start())
        .bind(range.end())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_confirmed_in_window(
        &self,
        offer_id: OfferId,
        first_day: NaiveDate,
        last_day: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, user_id, offer_id, start_date, end_date, guests, total_price,
                   status_id, created_at
            FROM reservations
            WHERE offer_id = $1 AND status_id = $2
              AND start_date <= $4 AND end_date >= $3
            ORDER BY start_date
            ",
        )
        .bind(offer_id.into_inner())
        .bind(self.confirmed_id())
        .bind(first_day)
        .bind(last_day)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.to_entities(rows)
    }

    #[instrument(skip(self, reservation), fields(offer_id = %reservation.offer_id))]
    async fn create_confirmed(&self, reservation: &Reservation) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serialize bookings of this offer until commit
        let locked = sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT id FROM offers WHERE id = $1 FOR UPDATE
            ",
        )
        .bind(reservation.offer_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(DomainError::OfferNotFound(reservation.offer_id));
        }

        let overlapping = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE offer_id = $1 AND status_id = $2
                  AND start_date < $4 AND end_date > $3
            )
            ",
        )
        .bind(reservation.offer_id.into_inner())
        .bind(self.confirmed_id())
        .bind(reservation.range.start())
        .bind(reservation.range.end())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if overlapping {
            debug!("Overlap detected under offer lock");
            // dropping tx rolls back and releases the lock
            return Err(DomainError::SlotAlreadyBooked);
        }

        sqlx::query(
            r"
            INSERT INTO reservations (id, user_id, offer_id, start_date, end_date, guests,
                                      total_price, status_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(reservation.id.into_inner())
        .bind(reservation.user_id.into_inner())
        .bind(reservation.offer_id.into_inner())
        .bind(reservation.range.start())
        .bind(reservation.range.end())
        .bind(reservation.guests)
        .bind(reservation.total_price)
        .bind(self.catalog.id_of(reservation.status))
        .bind(reservation.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &ReservationQuery) -> RepoResult<Vec<Reservation>> {
        let (guest, landlord) = scope_params(query.scope);

        let rows = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT r.id, r.user_id, r.offer_id, r.start_date, r.end_date, r.guests,
                   r.total_price, r.status_id, r.created_at
            FROM reservations r
            JOIN offers o ON o.id = r.offer_id
            WHERE (($1::uuid IS NULL AND $2::uuid IS NULL)
                   OR r.user_id = $1
                   OR o.landlord_id = $2)
              AND ($3::text = 'all'
                   OR ($3 = 'upcoming' AND r.end_date >= $4)
                   OR ($3 = 'past' AND r.end_date < $4))
              AND ($5::int IS NULL OR r.status_id = $5)
              AND ($6::date IS NULL OR r.end_date >= $6)
              AND ($7::date IS NULL OR r.start_date <= $7)
            ORDER BY r.start_date, r.created_at
            ",
        )
        .bind(guest)
        .bind(landlord)
        .bind(query.timeframe.as_str())
        .bind(query.today)
        .bind(query.status.map(|s| self.catalog.id_of(s)))
        .bind(query.date_from)
        .bind(query.date_to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.to_entities(rows)
    }

    #[instrument(skip(self))]
    async fn transition_status(
        &self,
        id: ReservationId,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE reservations SET status_id = $3
            WHERE id = $1 AND status_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(self.catalog.id_of(from))
        .bind(self.catalog.id_of(to))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn has_upcoming_confirmed(&self, offer_id: OfferId, today: NaiveDate) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE offer_id = $1 AND status_id = $2 AND end_date >= $3
            )
            ",
        )
        .bind(offer_id.into_inner())
        .bind(self.confirmed_id())
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
