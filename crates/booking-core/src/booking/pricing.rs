//! Total price of a stay

use crate::error::DomainError;
use crate::value_objects::StayRange;

/// `nights * price_per_night`, snapshotted onto the reservation at creation.
pub fn total_price(price_per_night: i64, range: &StayRange) -> Result<i64, DomainError> {
    range
        .nights()
        .checked_mul(price_per_night)
        .ok_or(DomainError::PriceOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range(s: (i32, u32, u32), e: (i32, u32, u32)) -> StayRange {
        StayRange::new(
            NaiveDate::from_ymd_opt(s.0, s.1, s.2).unwrap(),
            NaiveDate::from_ymd_opt(e.0, e.1, e.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_four_nights() {
        assert_eq!(total_price(100, &range((2025, 7, 1), (2025, 7, 5))).unwrap(), 400);
    }

    #[test]
    fn test_across_year_boundary() {
        assert_eq!(total_price(250, &range((2024, 12, 30), (2025, 1, 2))).unwrap(), 750);
    }

    #[test]
    fn test_free_offer() {
        assert_eq!(total_price(0, &range((2025, 7, 1), (2025, 7, 5))).unwrap(), 0);
    }

    #[test]
    fn test_overflow() {
        let err = total_price(i64::MAX, &range((2025, 7, 1), (2025, 7, 3))).unwrap_err();
        assert!(matches!(err, DomainError::PriceOverflow));
        assert!(err.is_validation());
    }
}
