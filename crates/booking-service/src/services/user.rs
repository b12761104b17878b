//! User service

use booking_core::entities::User;
use booking_core::{DomainError, UserId};
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: UserId) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Update name and phone of the current user
    #[instrument(skip(self, request))]
    pub async fn update_current_user(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.get_user_entity(user_id).await?;

        if let Some(phone) = &request.phone {
            if user.phone.as_ref() != Some(phone) && self.ctx.user_repo().phone_exists(phone).await? {
                return Err(DomainError::PhoneAlreadyExists.into());
            }
        }

        user.update_profile(request.first_name, request.last_name, request.phone);
        self.ctx.user_repo().update(&user).await?;
        info!(user_id = %user_id, "User profile updated");

        Ok(UserResponse::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{add_user, env};
    use booking_core::Role;

    #[tokio::test]
    async fn test_update_profile() {
        let env = env();
        let actor = add_user(&env.ctx, Role::User).await;
        let service = UserService::new(&env.ctx);

        let updated = service
            .update_current_user(
                actor.id,
                UpdateUserRequest {
                    first_name: Some("Maria".to_string()),
                    last_name: None,
                    phone: Some("+3900001".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Maria");

        let reloaded = service.get_current_user(actor.id).await.unwrap();
        assert_eq!(reloaded.phone.as_deref(), Some("+3900001"));
    }

    #[tokio::test]
    async fn test_phone_taken_by_someone_else() {
        let env = env();
        let first = add_user(&env.ctx, Role::User).await;
        let second = add_user(&env.ctx, Role::User).await;
        let service = UserService::new(&env.ctx);
        let request = UpdateUserRequest {
            first_name: None,
            last_name: None,
            phone: Some("+4700000".to_string()),
        };

        service.update_current_user(first.id, request.clone()).await.unwrap();
        // re-submitting your own number is fine
        service.update_current_user(first.id, request.clone()).await.unwrap();

        let err = service.update_current_user(second.id, request).await.unwrap_err();
        assert_eq!(err.error_code(), "PHONE_ALREADY_EXISTS");
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let env = env();
        let err = UserService::new(&env.ctx)
            .get_current_user(UserId::new())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
