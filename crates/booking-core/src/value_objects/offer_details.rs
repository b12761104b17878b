//! Room and bed counts of an offer

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferDetails {
    pub rooms: i32,
    pub beds: i32,
    pub double_beds: i32,
    pub sofa_beds: i32,
}

impl Default for OfferDetails {
    fn default() -> Self {
        Self {
            rooms: 1,
            beds: 0,
            double_beds: 0,
            sofa_beds: 0,
        }
    }
}

impl OfferDetails {
    /// At least one room; bed counts never negative
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.rooms < 1 {
            return Err(DomainError::ValidationError("rooms must be at least 1".to_string()));
        }
        for (name, count) in [
            ("beds", self.beds),
            ("double_beds", self.double_beds),
            ("sofa_beds", self.sofa_beds),
        ] {
            if count < 0 {
                return Err(DomainError::ValidationError(format!("{name} cannot be negative")));
            }
        }
        Ok(())
    }
}
