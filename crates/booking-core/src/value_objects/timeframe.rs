//! Reservation listing timeframe

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Which part of the timeline a reservation listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Stays that have not ended yet (`end_date >= today`)
    #[default]
    Upcoming,
    /// Stays that ended before today
    Past,
    All,
}

impl Timeframe {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Past => "past",
            Self::All => "all",
        }
    }

    /// Check whether a stay ending on `end_date` falls into this timeframe
    pub fn includes(self, end_date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Upcoming => end_date >= today,
            Self::Past => end_date < today,
            Self::All => true,
        }
    }

    /// Validate optional `date_from` / `date_to` filters against this timeframe
    pub fn validate_filters(
        self,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<(), DomainError> {
        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from >= to {
                return Err(DomainError::ValidationError(
                    "date_from must be before date_to".to_string(),
                ));
            }
        }

        let bounds = [("date_from", date_from), ("date_to", date_to)];
        match self {
            Self::Past => {
                if let Some((name, _)) = bounds.iter().find(|(_, d)| d.is_some_and(|d| d > today)) {
                    return Err(DomainError::ValidationError(format!(
                        "For 'past', {name} cannot be in the future"
                    )));
                }
            }
            Self::Upcoming => {
                if let Some((name, _)) = bounds.iter().find(|(_, d)| d.is_some_and(|d| d < today)) {
                    return Err(DomainError::ValidationError(format!(
                        "For 'upcoming', {name} cannot be in the past"
                    )));
                }
            }
            Self::All => {}
        }

        Ok(())
    }
}

impl FromStr for Timeframe {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "past" => Ok(Self::Past),
            "all" => Ok(Self::All),
            other => Err(DomainError::ValidationError(format!(
                "timeframe must be one of upcoming, past, all (got '{other}')"
            ))),
        }
    }
}
