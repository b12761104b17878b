//! Stay range - a half-open date interval `[start, end)`

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::DomainError;

/// Date interval of a stay. `start` is the check-in day, `end` the check-out day.
///
/// Always satisfies `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl StayRange {
    /// Create a stay range, rejecting empty or reversed intervals
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }

    /// Half-open overlap test. Ranges that only touch (one ends the day the
    /// other starts) do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Every day from `start` through `end`, both included
    pub fn days_inclusive(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| day.checked_add_days(Days::new(1)))
            .take_while(move |day| *day <= end)
    }
}
