//! Fixtures shared by service tests

use std::sync::Arc;

use booking_common::JwtService;
use booking_core::entities::{Offer, User};
use booking_core::{Actor, FixedClock, OfferId, Role, UserId};
use booking_db::MemoryStore;
use chrono::NaiveDate;
use tokio::sync::mpsc;

use crate::notifications::{Notification, NotificationQueue};

use super::context::ServiceContext;

pub(crate) struct TestEnv {
    pub ctx: ServiceContext,
    pub notifications: mpsc::Receiver<Notification>,
}

/// "Today" for every service test
pub(crate) fn today() -> NaiveDate {
    date(7, 1)
}

pub(crate) fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

pub(crate) fn env() -> TestEnv {
    let (queue, notifications) = NotificationQueue::channel(16);
    let ctx = ServiceContext::builder()
        .memory(MemoryStore::shared())
        .jwt_service(Arc::new(JwtService::new("test-secret", 3600, 57_600)))
        .clock(Arc::new(FixedClock(today())))
        .notifications(queue)
        .build()
        .unwrap();
    TestEnv { ctx, notifications }
}

pub(crate) async fn add_user(ctx: &ServiceContext, role: Role) -> Actor {
    let id = UserId::new();
    let user = User::new(
        id,
        format!("{id}@example.com"),
        "Test".to_string(),
        role.to_string(),
        role,
    );
    ctx.user_repo().create(&user, "not-a-hash").await.unwrap();
    Actor::new(id, role)
}

/// Active offer in Krakow owned by `landlord`
pub(crate) async fn add_offer(
    ctx: &ServiceContext,
    landlord: &Actor,
    price_per_night: i64,
    max_guests: i32,
) -> Offer {
    let offer = Offer::new(
        OfferId::new(),
        landlord.id,
        "Old town flat".to_string(),
        "Two rooms".to_string(),
        "Poland".to_string(),
        "Krakow".to_string(),
        "Rynek 1".to_string(),
        price_per_night,
        max_guests,
    );
    ctx.offer_repo().create(&offer).await.unwrap();
    offer
}
