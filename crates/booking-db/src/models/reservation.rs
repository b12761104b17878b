//! Reservation and reservation status database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reservations table
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub offer_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: i32,
    pub total_price: i64,
    pub status_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Row of the reservation_statuses table
#[derive(Debug, Clone, FromRow)]
pub struct StatusModel {
    pub id: i32,
    pub name: String,
}
