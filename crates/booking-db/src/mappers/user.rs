//! User model -> entity mapper

use booking_core::entities::User;
use booking_core::error::DomainError;
use booking_core::value_objects::{Role, UserId};

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| DomainError::InternalError(format!("user {}: {e}", model.id)))?;

        Ok(User {
            id: UserId::from_uuid(model.id),
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            role,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn model(role: &str) -> UserModel {
        UserModel {
            id: Uuid::new_v4(),
            email: "host@example.com".to_string(),
            first_name: "Ola".to_string(),
            last_name: "Nordmann".to_string(),
            phone: None,
            role: role.to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_is_parsed() {
        let user = User::try_from(model("landlord")).unwrap();
        assert_eq!(user.role, Role::Landlord);
    }

    #[test]
    fn test_unknown_role_is_internal_error() {
        let err = User::try_from(model("superuser")).unwrap_err();
        assert!(matches!(err, DomainError::InternalError(_)));
    }
}
