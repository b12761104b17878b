//! Response DTOs for API endpoints
//!
//! Ids serialize as UUID strings, dates as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use booking_core::{
    OfferAmenities, OfferDetails, OfferId, OfferTypeId, ReservationId, ReservationStatus,
    ReviewId, Role, UserId,
};

use super::requests::PageRequest;

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of results with the total match count
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: PageRequest, total: i64) -> Self {
        let seen = page.offset() + data.len() as i64;
        Self {
            data,
            pagination: PaginationMeta {
                page: page.page,
                limit: page.limit,
                total,
                has_more: seen < total,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub has_more: bool,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Offer Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct OfferResponse {
    pub id: OfferId,
    pub landlord_id: UserId,
    pub title: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub province: String,
    pub latitude: f64,
    pub longitude: f64,
    pub offer_type_id: Option<OfferTypeId>,
    pub details: OfferDetails,
    pub amenities: OfferAmenities,
    pub price_per_night: i64,
    pub max_guests: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferTypeResponse {
    pub id: OfferTypeId,
    pub name: String,
}

/// One entry of the amenity catalogue
#[derive(Debug, Clone, Serialize)]
pub struct AmenityResponse {
    pub key: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

// ============================================================================
// Reservation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub user_id: UserId,
    pub offer_id: OfferId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: i64,
    pub guests: i32,
    pub total_price: i64,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Review Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub user_id: UserId,
    pub offer_id: OfferId,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_has_more() {
        let page = PageRequest::new(Some(1), Some(2));
        let response = PaginatedResponse::new(vec![1, 2], page, 5);
        assert!(response.pagination.has_more);
        assert_eq!(response.pagination.total, 5);

        let last = PaginatedResponse::new(vec![5], PageRequest::new(Some(3), Some(2)), 5);
        assert!(!last.pagination.has_more);
    }

    #[test]
    fn test_readiness_response() {
        assert!(ReadinessResponse::ready(true).is_ready());

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }

    #[test]
    fn test_reservation_serializes_dates() {
        let response = ReservationResponse {
            id: ReservationId::new(),
            user_id: UserId::new(),
            offer_id: OfferId::new(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            nights: 4,
            guests: 2,
            total_price: 400,
            status: ReservationStatus::Confirmed,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["start_date"], "2025-07-01");
        assert_eq!(json["status"], "confirmed");
    }
}
