//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{auth, catalog, health, offers, reservations, reviews, users};
use crate::state::AppState;

/// API router (health routes are mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Liveness and readiness checks
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(offer_routes())
        .merge(catalog_routes())
        .merge(reservation_routes())
        .merge(review_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/@me",
            get(users::get_current_user).patch(users::update_current_user),
        )
        .route("/users/@me/offers", get(users::get_current_user_offers))
}

fn offer_routes() -> Router<AppState> {
    Router::new()
        .route("/offers", get(offers::search_offers).post(offers::create_offer))
        .route(
            "/offers/:offer_id",
            get(offers::get_offer)
                .patch(offers::update_offer)
                .delete(offers::delete_offer),
        )
        .route(
            "/offers/:offer_id/check-availability",
            get(offers::check_availability),
        )
        .route(
            "/offers/:offer_id/unavailable-dates",
            get(offers::unavailable_dates),
        )
        .route(
            "/offers/:offer_id/reservations",
            post(offers::create_reservation),
        )
        .route(
            "/offers/:offer_id/reviews",
            get(offers::list_reviews).post(offers::create_review),
        )
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/offer-types",
            get(catalog::list_offer_types).post(catalog::create_offer_type),
        )
        .route("/offer-types/:offer_type_id", get(catalog::get_offer_type))
        .route("/amenities", get(catalog::list_amenities))
}

fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/reservations", get(reservations::list_reservations))
        .route("/reservations/landlord", get(reservations::landlord_reservations))
        .route("/reservations/:reservation_id", get(reservations::get_reservation))
        .route(
            "/reservations/:reservation_id/cancel",
            post(reservations::cancel_reservation),
        )
}

fn review_routes() -> Router<AppState> {
    Router::new().route(
        "/reviews/:review_id",
        patch(reviews::update_review).delete(reviews::delete_review),
    )
}
