//! Offer type - the kind of place an offer rents out

use crate::error::DomainError;
use crate::value_objects::OfferTypeId;

/// Longest accepted type name
pub const OFFER_TYPE_NAME_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferType {
    pub id: OfferTypeId,
    pub name: String,
}

impl OfferType {
    /// New type with a trimmed, non-empty name
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > OFFER_TYPE_NAME_MAX {
            return Err(DomainError::ValidationError(format!(
                "offer type name must be 1-{OFFER_TYPE_NAME_MAX} characters"
            )));
        }
        Ok(Self {
            id: OfferTypeId::new(),
            name: name.to_string(),
        })
    }
}
