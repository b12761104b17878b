//! Entity to DTO mappers

use booking_common::TokenPair;
use booking_core::entities::{Offer, OfferType, Reservation, Review, User};
use booking_core::Amenity;

use super::responses::{
    AmenityResponse, AuthResponse, OfferResponse, OfferTypeResponse, ReservationResponse,
    ReviewResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, user: &User) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            user: UserResponse::from(user),
        }
    }
}

impl From<Offer> for OfferResponse {
    fn from(offer: Offer) -> Self {
        Self {
            id: offer.id,
            landlord_id: offer.landlord_id,
            title: offer.title,
            description: offer.description,
            country: offer.country,
            city: offer.city,
            address: offer.address,
            province: offer.province,
            latitude: offer.latitude,
            longitude: offer.longitude,
            offer_type_id: offer.offer_type_id,
            details: offer.details,
            amenities: offer.amenities,
            price_per_night: offer.price_per_night,
            max_guests: offer.max_guests,
            is_active: offer.is_active,
            created_at: offer.created_at,
            updated_at: offer.updated_at,
        }
    }
}

impl From<OfferType> for OfferTypeResponse {
    fn from(offer_type: OfferType) -> Self {
        Self {
            id: offer_type.id,
            name: offer_type.name,
        }
    }
}

impl From<Amenity> for AmenityResponse {
    fn from(amenity: Amenity) -> Self {
        Self {
            key: amenity.key(),
            name: amenity.label(),
        }
    }
}

impl From<&Reservation> for ReservationResponse {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            offer_id: r.offer_id,
            start_date: r.range.start(),
            end_date: r.range.end(),
            nights: r.range.nights(),
            guests: r.guests,
            total_price: r.total_price,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self::from(&r)
    }
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            offer_id: review.offer_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
