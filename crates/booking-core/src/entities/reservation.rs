//! Reservation entity - a booked stay

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{OfferId, ReservationId, ReservationStatus, StayRange, UserId};

/// A stay booked by a guest on an offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub user_id: UserId,
    pub offer_id: OfferId,
    pub range: StayRange,
    pub guests: i32,
    pub total_price: i64,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new confirmed reservation
    pub fn confirmed(
        user_id: UserId,
        offer_id: OfferId,
        range: StayRange,
        guests: i32,
        total_price: i64,
    ) -> Self {
        Self {
            id: ReservationId::new(),
            user_id,
            offer_id,
            range,
            guests,
            total_price,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    /// Confirmed and overlapping `range`
    #[inline]
    pub fn blocks(&self, range: &StayRange) -> bool {
        self.status.blocks_dates() && self.range.overlaps(range)
    }

    /// Move a confirmed reservation to cancelled
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        if !self.is_confirmed() {
            return Err(DomainError::AlreadyCancelled);
        }
        self.status = ReservationStatus::Cancelled;
        Ok(())
    }
}
