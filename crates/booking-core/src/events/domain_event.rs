//! Domain events - emitted after booking state changes commit

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{OfferId, ReservationId, UserId};

/// Domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    ReservationConfirmed(ReservationConfirmedEvent),
    ReservationCancelled(ReservationCancelledEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ReservationConfirmed(_) => "RESERVATION_CONFIRMED",
            Self::ReservationCancelled(_) => "RESERVATION_CANCELLED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ReservationConfirmed(e) => e.timestamp,
            Self::ReservationCancelled(e) => e.timestamp,
        }
    }

    pub fn reservation_id(&self) -> ReservationId {
        match self {
            Self::ReservationConfirmed(e) => e.reservation_id,
            Self::ReservationCancelled(e) => e.reservation_id,
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationConfirmedEvent {
    pub reservation_id: ReservationId,
    pub offer_id: OfferId,
    pub guest_id: UserId,
    pub offer_title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: i32,
    pub total_price: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCancelledEvent {
    pub reservation_id: ReservationId,
    pub offer_id: OfferId,
    pub guest_id: UserId,
    pub cancelled_by: UserId,
    pub offer_title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub timestamp: DateTime<Utc>,
}
