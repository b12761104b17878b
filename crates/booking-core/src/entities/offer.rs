//! Offer entity - a rentable listing owned by a landlord

use chrono::{DateTime, Utc};

use crate::value_objects::{OfferAmenities, OfferDetails, OfferId, OfferTypeId, UserId};

/// A rentable listing
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: OfferId,
    pub landlord_id: UserId,
    pub offer_type_id: Option<OfferTypeId>,
    pub title: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub province: String,
    /// Degrees, -90..=90
    pub latitude: f64,
    /// Degrees, -180..=180
    pub longitude: f64,
    pub details: OfferDetails,
    pub amenities: OfferAmenities,
    /// Price of one night in minor currency units
    pub price_per_night: i64,
    pub max_guests: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    /// Create a new active offer with default details, no amenities and no type
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: OfferId,
        landlord_id: UserId,
        title: String,
        description: String,
        country: String,
        city: String,
        address: String,
        price_per_night: i64,
        max_guests: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            landlord_id,
            offer_type_id: None,
            title,
            description,
            country,
            city,
            address,
            province: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            details: OfferDetails::default(),
            amenities: OfferAmenities::default(),
            price_per_night,
            max_guests,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.landlord_id == user_id
    }

    /// Whether a party of `guests` fits the offer
    #[inline]
    pub fn accepts_guests(&self, guests: i32) -> bool {
        (1..=self.max_guests).contains(&guests)
    }

    /// Whether the offer lies at valid coordinates
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
