//! Loading the reservation status catalog

use sqlx::PgPool;
use tracing::{error, info, instrument};

use booking_core::error::DomainError;
use booking_core::value_objects::StatusCatalog;

use crate::models::StatusModel;

use super::error::map_db_error;

/// Read `reservation_statuses` and build the catalog.
///
/// Fails with `MissingStatus` when a canonical status row is absent, which
/// makes the deployment unusable for booking.
#[instrument(skip(pool))]
pub async fn load_status_catalog(pool: &PgPool) -> Result<StatusCatalog, DomainError> {
    let rows = sqlx::query_as::<_, StatusModel>(
        r"
        SELECT id, name FROM reservation_statuses ORDER BY id
        ",
    )
    .fetch_all(pool)
    .await
    .map_err(map_db_error)?;

    let catalog = StatusCatalog::from_rows(rows.into_iter().map(|row| (row.id, row.name)))
        .inspect_err(|e| error!(error = %e, "Reservation status catalog is incomplete"))?;

    info!("Reservation status catalog loaded");
    Ok(catalog)
}
