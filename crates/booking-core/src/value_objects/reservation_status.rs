//! Reservation status and the persisted status catalog
//!
//! Statuses live in their own table and reservations reference them by row id.
//! The closed [`ReservationStatus`] enum is what the rest of the code works with;
//! [`StatusCatalog`] is the mapping between the enum and the stored rows, built
//! once at startup. A catalog cannot exist without every canonical status, so a
//! missing `confirmed` row is reported before the first request is served.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Lifecycle state of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    Archive,
}

impl ReservationStatus {
    /// All canonical statuses
    pub const ALL: [Self; 3] = [Self::Confirmed, Self::Cancelled, Self::Archive];

    /// Persisted name of the status
    pub const fn name(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Archive => "archive",
        }
    }

    /// Only confirmed reservations block the calendar
    #[inline]
    pub const fn blocks_dates(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReservationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::ValidationError(format!("Unknown reservation status: {s}")))
    }
}

/// Mapping between [`ReservationStatus`] and persisted status row ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCatalog {
    by_status: HashMap<ReservationStatus, i32>,
    by_id: HashMap<i32, ReservationStatus>,
}

impl StatusCatalog {
    /// Build the catalog from `(id, name)` rows.
    ///
    /// Unknown names are ignored. Every canonical status must be present.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (i32, S)>,
        S: AsRef<str>,
    {
        let mut by_status = HashMap::new();
        let mut by_id = HashMap::new();

        for (id, name) in rows {
            if let Ok(status) = name.as_ref().parse::<ReservationStatus>() {
                by_status.entry(status).or_insert(id);
                by_id.insert(id, status);
            }
        }

        if let Some(missing) = ReservationStatus::ALL
            .into_iter()
            .find(|status| !by_status.contains_key(status))
        {
            return Err(DomainError::MissingStatus(missing.name()));
        }

        Ok(Self { by_status, by_id })
    }

    /// Catalog with sequential ids, matching the seeded table
    pub fn seeded() -> Self {
        let by_status: HashMap<_, _> = ReservationStatus::ALL
            .into_iter()
            .zip(1..)
            .collect();
        let by_id = by_status.iter().map(|(s, id)| (*id, *s)).collect();
        Self { by_status, by_id }
    }

    /// Row id of a status
    pub fn id_of(&self, status: ReservationStatus) -> i32 {
        // from_rows guarantees every canonical status is present
        self.by_status.get(&status).copied().unwrap_or_default()
    }

    /// Status of a row id
    pub fn status_of(&self, id: i32) -> Result<ReservationStatus, DomainError> {
        self.by_id
            .get(&id)
            .copied()
            .ok_or_else(|| DomainError::InternalError(format!("Unknown reservation status id: {id}")))
    }
}
