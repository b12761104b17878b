//! Request DTOs for API endpoints
//!
//! JSON bodies implement `Deserialize` and `Validate`; query strings only
//! `Deserialize`, their rules live in the services.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use booking_core::{OfferAmenities, OfferDetails, OfferTypeId, Role, Timeframe};

// ============================================================================
// Pagination
// ============================================================================

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page-number pagination, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Missing values fall back to page 1 / 20 items; limit is capped at 100
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"), length(max = 100))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    #[validate(length(min = 5, max = 20, message = "Phone must be 5-20 characters"))]
    pub phone: Option<String>,

    /// `user` when omitted
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: Option<String>,

    #[validate(length(min = 5, max = 20, message = "Phone must be 5-20 characters"))]
    pub phone: Option<String>,
}

// ============================================================================
// Offer Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOfferRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 3000, message = "Description must be at most 3000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 100))]
    pub country: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 255))]
    pub address: String,

    #[serde(default)]
    #[validate(length(max = 100))]
    pub province: String,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,

    #[validate(range(min = 0, message = "Price per night cannot be negative"))]
    pub price_per_night: i64,

    #[validate(range(min = 1, message = "An offer must accept at least one guest"))]
    pub max_guests: i32,

    pub offer_type_id: Option<OfferTypeId>,

    /// One room and no beds when omitted
    #[serde(default)]
    pub details: OfferDetails,

    #[serde(default)]
    pub amenities: OfferAmenities,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOfferRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 3000, message = "Description must be at most 3000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,

    #[validate(length(max = 100))]
    pub province: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,

    #[validate(range(min = 0, message = "Price per night cannot be negative"))]
    pub price_per_night: Option<i64>,

    #[validate(range(min = 1, message = "An offer must accept at least one guest"))]
    pub max_guests: Option<i32>,

    pub is_active: Option<bool>,

    pub offer_type_id: Option<OfferTypeId>,

    pub details: Option<OfferDetails>,

    /// Replaces the whole amenity set
    pub amenities: Option<OfferAmenities>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOfferTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// `GET /offers` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferSearchParams {
    pub city: Option<String>,
    pub country: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub guests: Option<i32>,
    pub offer_type: Option<OfferTypeId>,
    /// Comma-separated amenity keys, all required, e.g. `wifi,parking`
    pub amenities: Option<String>,
    /// With `end`: only offers free over `[start, end)`
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AvailabilityParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CalendarParams {
    pub year: i32,
    pub month: u32,
}

// ============================================================================
// Reservation Requests
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Checked against the offer after the booker is authorized
    #[serde(rename = "guests_number", alias = "guests")]
    pub guests: i32,
}

/// `GET /reservations` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationListParams {
    #[serde(default)]
    pub timeframe: Timeframe,
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

// ============================================================================
// Review Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub comment: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,

    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub comment: Option<String>,
}
