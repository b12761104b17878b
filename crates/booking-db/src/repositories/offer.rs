//! PostgreSQL implementation of OfferRepository

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::instrument;

use booking_core::entities::Offer;
use booking_core::error::DomainError;
use booking_core::traits::{OfferQuery, OfferRepository, RepoResult};
use booking_core::value_objects::{OfferId, ReservationStatus, StatusCatalog, UserId};

use crate::models::OfferModel;

use super::error::{is_foreign_key_violation, map_db_error};

/// Columns read into [`OfferModel`], qualified with the `o` alias
const OFFER_COLUMNS: &str = r"
    o.id, o.landlord_id, o.offer_type_id, o.title, o.description,
    o.country, o.city, o.address, o.province, o.latitude, o.longitude,
    o.rooms, o.beds, o.double_beds, o.sofa_beds, o.amenities,
    o.price_per_night, o.max_guests, o.is_active, o.created_at, o.updated_at
";

/// Search filter shared by `search` and `count`. Every parameter but `$10`
/// is optional; `$6`/`$7` is the stay that must not overlap a confirmed
/// reservation and `$10` the amenity keys that must all be present.
const SEARCH_FILTER: &str = r"
    WHERE o.is_active
      AND ($1::text IS NULL OR LOWER(o.city) = LOWER($1))
      AND ($2::text IS NULL OR LOWER(o.country) = LOWER($2))
      AND ($3::bigint IS NULL OR o.price_per_night >= $3)
      AND ($4::bigint IS NULL OR o.price_per_night <= $4)
      AND ($5::int IS NULL OR o.max_guests >= $5)
      AND ($6::date IS NULL OR NOT EXISTS (
            SELECT 1 FROM reservations r
            WHERE r.offer_id = o.id
              AND r.status_id = $8
              AND r.start_date < $7
              AND r.end_date > $6
      ))
      AND ($9::uuid IS NULL OR o.offer_type_id = $9)
      AND o.amenities @> $10::text[]
";

/// PostgreSQL implementation of OfferRepository
#[derive(Clone)]
pub struct PgOfferRepository {
    pool: PgPool,
    catalog: Arc<StatusCatalog>,
}

impl PgOfferRepository {
    /// Create a new PgOfferRepository
    pub fn new(pool: PgPool, catalog: Arc<StatusCatalog>) -> Self {
        Self { pool, catalog }
    }

    fn bind_search<'q, O>(
        &self,
        query: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
        filter: &'q OfferQuery,
    ) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
        query
            .bind(filter.city.as_deref())
            .bind(filter.country.as_deref())
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.guests)
            .bind(filter.available.map(|r| r.start()))
            .bind(filter.available.map(|r| r.end()))
            .bind(self.catalog.id_of(ReservationStatus::Confirmed))
            .bind(filter.offer_type.map(|t| t.into_inner()))
            .bind(
                filter
                    .amenities
                    .iter()
                    .map(|a| a.key().to_string())
                    .collect::<Vec<String>>(),
            )
    }
}

#[async_trait]
impl OfferRepository for PgOfferRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: OfferId) -> RepoResult<Option<Offer>> {
        let sql = format!("SELECT {OFFER_COLUMNS} FROM offers o WHERE o.id = $1");
        let result = sqlx::query_as::<_, OfferModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Offer::from))
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &OfferQuery) -> RepoResult<Vec<Offer>> {
        let sql = format!(
            r"
            SELECT {OFFER_COLUMNS}
            FROM offers o
            {SEARCH_FILTER}
            ORDER BY o.created_at DESC, o.id
            LIMIT $11 OFFSET $12
            "
        );

        let rows = self
            .bind_search(sqlx::query_as::<_, OfferModel>(&sql), query)
            .bind(query.limit.clamp(1, 100))
            .bind(query.offset.max(0))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, query: &OfferQuery) -> RepoResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM offers o {SEARCH_FILTER}");

        let (total,) = self
            .bind_search(sqlx::query_as::<_, (i64,)>(&sql), query)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(total)
    }

    #[instrument(skip(self))]
    async fn find_by_landlord(&self, landlord_id: UserId) -> RepoResult<Vec<Offer>> {
        let sql = format!(
            "SELECT {OFFER_COLUMNS} FROM offers o WHERE o.landlord_id = $1 ORDER BY o.created_at DESC"
        );
        let rows = sqlx::query_as::<_, OfferModel>(&sql)
            .bind(landlord_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }

    #[instrument(skip(self, offer), fields(offer_id = %offer.id))]
    async fn create(&self, offer: &Offer) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO offers (id, landlord_id, offer_type_id, title, description,
                                country, city, address, province, latitude, longitude,
                                rooms, beds, double_beds, sofa_beds, amenities,
                                price_per_night, max_guests, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                    $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            ",
        )
        .bind(offer.id.into_inner())
        .bind(offer.landlord_id.into_inner())
        .bind(offer.offer_type_id.map(|t| t.into_inner()))
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(&offer.country)
        .bind(&offer.city)
        .bind(&offer.address)
        .bind(&offer.province)
        .bind(offer.latitude)
        .bind(offer.longitude)
        .bind(offer.details.rooms)
        .bind(offer.details.beds)
        .bind(offer.details.double_beds)
        .bind(offer.details.sofa_beds)
        .bind(amenity_keys(offer))
        .bind(offer.price_per_night)
        .bind(offer.max_guests)
        .bind(offer.is_active)
        .bind(offer.created_at)
        .bind(offer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                fk_error(offer)
            } else {
                map_db_error(e)
            }
        })?;

        Ok(())
    }

    #[instrument(skip(self, offer), fields(offer_id = %offer.id))]
    async fn update(&self, offer: &Offer) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE offers
            SET offer_type_id = $2, title = $3, description = $4,
                country = $5, city = $6, address = $7, province = $8,
                latitude = $9, longitude = $10,
                rooms = $11, beds = $12, double_beds = $13, sofa_beds = $14,
                amenities = $15, price_per_night = $16, max_guests = $17,
                is_active = $18, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(offer.id.into_inner())
        .bind(offer.offer_type_id.map(|t| t.into_inner()))
        .bind(&offer.title)
        .bind(&offer.description)
        .bind(&offer.country)
        .bind(&offer.city)
        .bind(&offer.address)
        .bind(&offer.province)
        .bind(offer.latitude)
        .bind(offer.longitude)
        .bind(offer.details.rooms)
        .bind(offer.details.beds)
        .bind(offer.details.double_beds)
        .bind(offer.details.sofa_beds)
        .bind(amenity_keys(offer))
        .bind(offer.price_per_night)
        .bind(offer.max_guests)
        .bind(offer.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                fk_error(offer)
            } else {
                map_db_error(e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OfferNotFound(offer.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: OfferId) -> RepoResult<()> {
        // reservations and reviews go with it (ON DELETE CASCADE)
        let result = sqlx::query(
            r"
            DELETE FROM offers WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::OfferNotFound(id));
        }

        Ok(())
    }
}

fn amenity_keys(offer: &Offer) -> Vec<String> {
    offer.amenities.keys().into_iter().map(str::to_string).collect()
}

/// The landlord or the offer type referenced by `offer` is gone
fn fk_error(offer: &Offer) -> DomainError {
    match offer.offer_type_id {
        Some(type_id) => DomainError::UnknownOfferType(type_id),
        None => DomainError::UserNotFound(offer.landlord_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgOfferRepository>();
    }

    #[test]
    fn test_search_filter_placeholders() {
        for n in 1..=10 {
            assert!(SEARCH_FILTER.contains(&format!("${n}")), "missing ${n}");
        }
        assert!(!SEARCH_FILTER.contains("$11"));
    }
}
