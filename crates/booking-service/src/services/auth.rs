//! Authentication service
//!
//! Registration, login and token refresh. Tokens are stateless; refresh
//! re-reads the user so role changes and deactivation take effect.

use booking_common::AppError;
use booking_core::entities::User;
use booking_core::{Actor, DomainError, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user or landlord
    #[instrument(skip(self, request), fields(email = %request.email, role = %request.role))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        if !request.role.is_self_assignable() {
            return Err(DomainError::RoleNotAssignable(request.role.to_string()).into());
        }

        let password_hash = self.ctx.password_service().hash_new(&request.password)?;

        let email = request.email.trim().to_lowercase();
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if let Some(phone) = &request.phone {
            if self.ctx.user_repo().phone_exists(phone).await? {
                return Err(DomainError::PhoneAlreadyExists.into());
            }
        }

        let mut user = User::new(
            UserId::new(),
            email,
            request.first_name,
            request.last_name,
            request.role,
        );
        user.phone = request.phone;

        self.ctx.user_repo().create(&user, &password_hash).await?;
        info!(user_id = %user.id, "User registered");

        self.issue_tokens(&user)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| {
                warn!("Login failed: unknown or inactive user");
                AppError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if let Err(e) = self
            .ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(e.into());
        }

        info!(user_id = %user.id, "User logged in");
        self.issue_tokens(&user)
    }

    /// Exchange a refresh token for a new pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Refresh for unknown or inactive user");
                AppError::InvalidToken
            })?;

        self.issue_tokens(&user)
    }

    /// Resolve an access token to the calling actor
    pub fn authenticate(&self, access_token: &str) -> ServiceResult<Actor> {
        let claims = self.ctx.jwt_service().validate_access_token(access_token)?;
        Ok(claims.actor()?)
    }

    fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let tokens = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.role)
            .map_err(ServiceError::from)?;
        Ok(AuthResponse::new(tokens, user))
    }
}
