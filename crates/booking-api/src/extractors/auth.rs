//! Authentication extractor
//!
//! Reads the bearer access token and turns its claims into an [`Actor`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use booking_core::Actor;
use booking_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Caller identity carried by a valid access token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Actor);

impl AuthUser {
    pub fn actor(&self) -> &Actor {
        &self.0
    }
}

fn authenticate(state: &AppState, token: &str) -> Result<Actor, ApiError> {
    AuthService::new(state.service_context())
        .authenticate(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            ApiError::from(e)
        })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    if parts.headers.contains_key(axum::http::header::AUTHORIZATION) {
                        tracing::debug!(error = %e, "Malformed authorization header");
                        ApiError::InvalidAuthFormat
                    } else {
                        ApiError::MissingAuth
                    }
                })?;

        let app_state = AppState::from_ref(state);
        authenticate(&app_state, bearer.token()).map(AuthUser)
    }
}

/// Optional authenticated user
///
/// `None` without an authorization header; a present but invalid token is
/// still rejected.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn actor(&self) -> Option<&Actor> {
        self.0.as_ref().map(AuthUser::actor)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(axum::http::header::AUTHORIZATION) {
            return Ok(OptionalAuthUser(None));
        }

        AuthUser::from_request_parts(parts, state)
            .await
            .map(|user| OptionalAuthUser(Some(user)))
    }
}
