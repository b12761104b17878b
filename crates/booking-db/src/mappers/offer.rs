//! Offer model -> entity mappers

use booking_core::entities::{Offer, OfferType};
use booking_core::value_objects::{OfferAmenities, OfferDetails, OfferId, OfferTypeId, UserId};

use crate::models::{OfferModel, OfferTypeModel};

impl From<OfferModel> for Offer {
    fn from(model: OfferModel) -> Self {
        Offer {
            id: OfferId::from_uuid(model.id),
            landlord_id: UserId::from_uuid(model.landlord_id),
            offer_type_id: model.offer_type_id.map(OfferTypeId::from_uuid),
            title: model.title,
            description: model.description,
            country: model.country,
            city: model.city,
            address: model.address,
            province: model.province,
            latitude: model.latitude,
            longitude: model.longitude,
            details: OfferDetails {
                rooms: model.rooms,
                beds: model.beds,
                double_beds: model.double_beds,
                sofa_beds: model.sofa_beds,
            },
            // keys dropped from the catalogue are ignored
            amenities: OfferAmenities::from_keys(&model.amenities),
            price_per_night: model.price_per_night,
            max_guests: model.max_guests,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<OfferTypeModel> for OfferType {
    fn from(model: OfferTypeModel) -> Self {
        OfferType {
            id: OfferTypeId::from_uuid(model.id),
            name: model.name,
        }
    }
}
