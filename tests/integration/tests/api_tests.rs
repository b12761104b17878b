//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Datelike;
use integration_tests::{
    assert_json, assert_status, check_test_env, days_from_now, fixtures::*, TestServer,
};
use reqwest::StatusCode;

async fn register(server: &TestServer, request: &RegisterRequest) -> AuthResponse {
    let response = server.api_post("/auth/register", None, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_offer(server: &TestServer, token: &str, price: i64, max_guests: i32) -> OfferResponse {
    let response = server
        .api_post("/offers", Some(token), &CreateOfferRequest::unique(price, max_guests))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

fn stay(from: i64, to: i64, guests: i32) -> CreateReservationRequest {
    CreateReservationRequest {
        start_date: days_from_now(from),
        end_date: days_from_now(to),
        guests,
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_login_refresh() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::landlord();
    let auth = register(&server, &request).await;

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "landlord");
    assert_eq!(auth.token_type, "Bearer");

    let response = server
        .api_post("/auth/login", None, &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let login: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.user.id, auth.user.id);

    let response = server
        .api_post(
            "/auth/refresh",
            None,
            &RefreshTokenRequest {
                refresh_token: login.refresh_token,
            },
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.access_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::guest();
    register(&server, &request).await;

    let response = server.api_post("/auth/register", None, &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: format!("missing-{}@example.com", unique_suffix()),
        password: "wrongpass1".to_string(),
    };

    let response = server.api_post("/auth/login", None, &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Booking Tests
// ============================================================================

#[tokio::test]
async fn test_booking_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let landlord = register(&server, &RegisterRequest::landlord()).await;
    let guest = register(&server, &RegisterRequest::guest()).await;
    let offer = create_offer(&server, &landlord.access_token, 100, 4).await;
    let path = format!("/offers/{}/reservations", offer.id);

    let response = server
        .api_post(&path, Some(&guest.access_token), &stay(30, 34, 2))
        .await
        .unwrap();
    let reservation: ReservationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reservation.total_price, 400);
    assert_eq!(reservation.nights, 4);
    assert_eq!(reservation.status, "confirmed");

    // Overlaps the last night
    let response = server
        .api_post(&path, Some(&guest.access_token), &stay(33, 35, 2))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "SLOT_ALREADY_BOOKED");

    // Check-in on the previous check-out day
    let response = server
        .api_post(&path, Some(&guest.access_token), &stay(34, 35, 2))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let check = format!(
        "/offers/{}/check-availability?start={}&end={}",
        offer.id,
        days_from_now(31),
        days_from_now(32)
    );
    let response = server.api_get(&check, None).await.unwrap();
    let availability: AvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!availability.available);

    let response = server
        .api_get("/reservations?timeframe=upcoming", Some(&guest.access_token))
        .await
        .unwrap();
    let mine: Vec<ReservationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 2);
}

#[tokio::test]
async fn test_own_offer_and_guest_limit_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let landlord = register(&server, &RegisterRequest::landlord()).await;
    let guest = register(&server, &RegisterRequest::guest()).await;
    let offer = create_offer(&server, &landlord.access_token, 100, 2).await;
    let path = format!("/offers/{}/reservations", offer.id);

    let response = server
        .api_post(&path, Some(&landlord.access_token), &stay(10, 12, 1))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "CANNOT_BOOK_OWN_OFFER");

    let response = server
        .api_post(&path, Some(&guest.access_token), &stay(10, 12, 3))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Neither attempt left a reservation behind
    let check_in = days_from_now(10);
    let calendar = format!(
        "/offers/{}/unavailable-dates?year={}&month={}",
        offer.id,
        check_in.year(),
        check_in.month()
    );
    let response = server.api_get(&calendar, None).await.unwrap();
    let dates: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(dates.is_empty());
}

#[tokio::test]
async fn test_concurrent_bookings_single_winner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let landlord = register(&server, &RegisterRequest::landlord()).await;
    let offer = create_offer(&server, &landlord.access_token, 90, 2).await;
    let path = format!("/offers/{}/reservations", offer.id);

    let mut guests = Vec::new();
    for _ in 0..4 {
        guests.push(register(&server, &RegisterRequest::guest()).await.access_token);
    }

    let attempts = guests.iter().map(|token| {
        let server = &server;
        let path = &path;
        async move {
            server
                .api_post(path, Some(token), &stay(60, 63, 1))
                .await
                .unwrap()
                .status()
        }
    });
    let statuses = futures::future::join_all(attempts).await;

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();
    assert_eq!(created, 1, "{statuses:?}");
    assert_eq!(conflicts, 3, "{statuses:?}");
}

#[tokio::test]
async fn test_cancel_reservation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let landlord = register(&server, &RegisterRequest::landlord()).await;
    let guest = register(&server, &RegisterRequest::guest()).await;
    let stranger = register(&server, &RegisterRequest::guest()).await;
    let offer = create_offer(&server, &landlord.access_token, 70, 2).await;
    let path = format!("/offers/{}/reservations", offer.id);

    let response = server
        .api_post(&path, Some(&guest.access_token), &stay(20, 22, 1))
        .await
        .unwrap();
    let reservation: ReservationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let cancel = format!("/reservations/{}/cancel", reservation.id);

    let response = server.api_post_empty(&cancel, &stranger.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.api_post_empty(&cancel, &landlord.access_token).await.unwrap();
    let cancelled: ReservationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, "cancelled");

    let response = server.api_post_empty(&cancel, &guest.access_token).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .api_post(&path, Some(&stranger.access_token), &stay(20, 22, 1))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

// ============================================================================
// Offer & Review Tests
// ============================================================================

#[tokio::test]
async fn test_search_and_reviews() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let landlord = register(&server, &RegisterRequest::landlord()).await;
    let guest = register(&server, &RegisterRequest::guest()).await;
    let offer = create_offer(&server, &landlord.access_token, 120, 3).await;

    let response = server
        .api_get(&format!("/offers?city={}&guests=3", offer.city.to_uppercase()), None)
        .await
        .unwrap();
    let found: PaginatedOffers = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.pagination.total, 1);
    assert_eq!(found.data[0].id, offer.id);

    let response = server
        .api_post(
            &format!("/offers/{}/reviews", offer.id),
            Some(&guest.access_token),
            &CreateReviewRequest {
                rating: 4,
                comment: "Great location".to_string(),
            },
        )
        .await
        .unwrap();
    let review: ReviewResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(review.rating, 4);

    let response = server
        .api_get(&format!("/offers/{}/reviews", offer.id), None)
        .await
        .unwrap();
    let reviews: Vec<ReviewResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviews.len(), 1);

    let response = server
        .api_delete(&format!("/offers/{}", offer.id), &landlord.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .api_get(&format!("/offers/{}/reviews", offer.id), None)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
