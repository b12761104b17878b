//! Test fixtures and data generators
//!
//! Request bodies mirror the API's JSON shapes; responses deserialize only
//! the fields the tests assert on.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unique across runs against the same database
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// A date `days` from today; stays in the future so bookings are accepted
pub fn days_from_now(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl RegisterRequest {
    fn with_role(role: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("{role}-{suffix}@example.com"),
            password: "TestPass123".to_string(),
            first_name: "Test".to_string(),
            last_name: role.to_string(),
            role: role.to_string(),
        }
    }

    pub fn guest() -> Self {
        Self::with_role("user")
    }

    pub fn landlord() -> Self {
        Self::with_role("landlord")
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct CreateOfferRequest {
    pub title: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub price_per_night: i64,
    pub max_guests: i32,
}

impl CreateOfferRequest {
    /// Each offer gets its own city so searches only see this test's data
    pub fn unique(price_per_night: i64, max_guests: i32) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Flat {suffix}"),
            description: "Quiet and bright".to_string(),
            country: "Poland".to_string(),
            city: format!("City-{suffix}"),
            address: "Rynek 1".to_string(),
            price_per_night,
            max_guests,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OfferResponse {
    pub id: String,
    pub landlord_id: String,
    pub city: String,
    pub price_per_night: i64,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct PaginatedOffers {
    pub data: Vec<OfferResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub has_more: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CreateReservationRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "guests_number")]
    pub guests: i32,
}

#[derive(Debug, Deserialize)]
pub struct ReservationResponse {
    pub id: String,
    pub offer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: i64,
    pub total_price: i64,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct CreateReviewRequest {
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: String,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
