//! Offer and offer type database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for offers table
#[derive(Debug, Clone, FromRow)]
pub struct OfferModel {
    pub id: Uuid,
    pub landlord_id: Uuid,
    pub offer_type_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub province: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rooms: i32,
    pub beds: i32,
    pub double_beds: i32,
    pub sofa_beds: i32,
    pub amenities: Vec<String>,
    pub price_per_night: i64,
    pub max_guests: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for offer_types table
#[derive(Debug, Clone, FromRow)]
pub struct OfferTypeModel {
    pub id: Uuid,
    pub name: String,
}
