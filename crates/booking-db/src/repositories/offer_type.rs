//! PostgreSQL implementation of OfferTypeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booking_core::entities::OfferType;
use booking_core::error::DomainError;
use booking_core::traits::{OfferTypeRepository, RepoResult};
use booking_core::value_objects::OfferTypeId;

use crate::models::OfferTypeModel;

use super::error::{map_db_error, map_unique_violation};

#[derive(Clone)]
pub struct PgOfferTypeRepository {
    pool: PgPool,
}

impl PgOfferTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfferTypeRepository for PgOfferTypeRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<OfferType>> {
        let rows = sqlx::query_as::<_, OfferTypeModel>(
            r"
            SELECT id, name FROM offer_types ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(OfferType::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: OfferTypeId) -> RepoResult<Option<OfferType>> {
        let result = sqlx::query_as::<_, OfferTypeModel>(
            r"
            SELECT id, name FROM offer_types WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(OfferType::from))
    }

    #[instrument(skip(self, offer_type), fields(name = %offer_type.name))]
    async fn create(&self, offer_type: &OfferType) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO offer_types (id, name) VALUES ($1, $2)
            ",
        )
        .bind(offer_type.id.into_inner())
        .bind(&offer_type.name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, |_| DomainError::OfferTypeExists(offer_type.name.clone()))
        })?;

        Ok(())
    }
}
