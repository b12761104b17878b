//! Calendar expansion of confirmed reservations into blocked days

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use crate::entities::Reservation;
use crate::error::DomainError;

/// First and last day of a calendar month, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }

        let unrepresentable =
            || DomainError::ValidationError(format!("Year {year} is out of range"));

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(unrepresentable)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let last_day = match next_month.and_then(|d| d.pred_opt()) {
            Some(day) => day,
            // December of the last representable year
            None => NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(unrepresentable)?,
        };

        Ok(Self { first_day, last_day })
    }

    /// Whether a stay touches this month (end day counted)
    #[inline]
    pub fn intersects(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.last_day && end >= self.first_day
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }
}

/// Every day from check-in through check-out of each confirmed reservation
/// touching `window`, deduplicated and ascending.
///
/// Whole reservations are expanded, so days of the neighbouring months are
/// included when a stay crosses the month boundary.
pub fn blocked_dates<'a, I>(window: &MonthWindow, reservations: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    reservations
        .into_iter()
        .filter(|r| r.status.blocks_dates())
        .filter(|r| window.intersects(r.range.start(), r.range.end()))
        .flat_map(|r| r.range.days_inclusive())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{OfferId, StayRange, UserId};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn booked(s: (u32, u32), e: (u32, u32)) -> Reservation {
        let range = StayRange::new(date(s.0, s.1), date(e.0, e.1)).unwrap();
        Reservation::confirmed(UserId::new(), OfferId::new(), range, 1, 0)
    }

    #[test]
    fn test_month_window() {
        let feb = MonthWindow::new(2024, 2).unwrap();
        assert_eq!(feb.last_day, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let dec = MonthWindow::new(2025, 12).unwrap();
        assert_eq!(dec.last_day, date(12, 31));
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(MonthWindow::new(2025, 0), Err(DomainError::InvalidMonth(0))));
        assert!(matches!(MonthWindow::new(2025, 13), Err(DomainError::InvalidMonth(13))));
    }

    #[test]
    fn test_unrepresentable_year() {
        assert!(MonthWindow::new(i32::MAX, 1).unwrap_err().is_validation());
    }

    #[test]
    fn test_end_day_is_included() {
        let window = MonthWindow::new(2025, 7).unwrap();
        let days = blocked_dates(&window, &[booked((7, 1), (7, 5))]);
        let expected: BTreeSet<_> = (1..=5).map(|d| date(7, d)).collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn test_cross_month_stay_is_expanded_whole() {
        let window = MonthWindow::new(2025, 7).unwrap();
        let days: Vec<_> = blocked_dates(&window, &[booked((6, 29), (7, 2))]).into_iter().collect();
        assert_eq!(days, vec![date(6, 29), date(6, 30), date(7, 1), date(7, 2)]);
    }

    #[test]
    fn test_stay_ending_on_first_day_touches_month() {
        let window = MonthWindow::new(2025, 7).unwrap();
        let days = blocked_dates(&window, &[booked((6, 28), (7, 1))]);
        assert!(days.contains(&date(7, 1)));
        assert!(blocked_dates(&window, &[booked((6, 1), (6, 30))]).is_empty());
    }

    #[test]
    fn test_dedup_and_cancelled_skipped() {
        let window = MonthWindow::new(2025, 7).unwrap();
        let mut cancelled = booked((7, 20), (7, 22));
        cancelled.cancel().unwrap();
        let days = blocked_dates(
            &window,
            &[booked((7, 1), (7, 3)), booked((7, 3), (7, 4)), cancelled],
        );
        assert_eq!(days.len(), 4);
        assert!(!days.contains(&date(7, 21)));
    }
}
