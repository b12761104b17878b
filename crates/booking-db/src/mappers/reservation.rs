//! Reservation model -> entity mapper

use booking_core::entities::Reservation;
use booking_core::error::DomainError;
use booking_core::value_objects::{OfferId, ReservationId, StatusCatalog, StayRange, UserId};

use crate::models::ReservationModel;

/// Convert a row, resolving its status id through the catalog
pub fn reservation_from_model(
    model: ReservationModel,
    catalog: &StatusCatalog,
) -> Result<Reservation, DomainError> {
    Ok(Reservation {
        id: ReservationId::from_uuid(model.id),
        user_id: UserId::from_uuid(model.user_id),
        offer_id: OfferId::from_uuid(model.offer_id),
        range: StayRange::new(model.start_date, model.end_date)?,
        guests: model.guests,
        total_price: model.total_price,
        status: catalog.status_of(model.status_id)?,
        created_at: model.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::value_objects::ReservationStatus;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn model(status_id: i32) -> ReservationModel {
        ReservationModel {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            offer_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            guests: 2,
            total_price: 400,
            status_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_resolved_through_catalog() {
        let catalog = StatusCatalog::seeded();
        let id = catalog.id_of(ReservationStatus::Cancelled);
        let reservation = reservation_from_model(model(id), &catalog).unwrap();
        assert_eq!(reservation.status, ReservationStatus::Cancelled);
        assert_eq!(reservation.range.nights(), 4);
    }

    #[test]
    fn test_unknown_status_id() {
        assert!(reservation_from_model(model(42), &StatusCatalog::seeded()).is_err());
    }
}
