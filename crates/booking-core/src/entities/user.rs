//! User entity - an account that can book, host, or administer

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, UserId};

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with the given role
    pub fn new(
        id: UserId,
        email: String,
        first_name: String,
        last_name: String,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            first_name,
            last_name,
            phone: None,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// "First Last", trimmed when one part is empty
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[inline]
    pub fn is_landlord(&self) -> bool {
        self.role == Role::Landlord
    }

    /// Update profile fields, keeping the ones that are `None`
    pub fn update_profile(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
    ) {
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if phone.is_some() {
            self.phone = phone;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            UserId::new(),
            "anna@example.com".to_string(),
            "Anna".to_string(),
            "Nowak".to_string(),
            Role::User,
        )
    }

    #[test]
    fn test_full_name() {
        let mut u = user();
        assert_eq!(u.full_name(), "Anna Nowak");
        u.last_name.clear();
        assert_eq!(u.full_name(), "Anna");
    }

    #[test]
    fn test_update_profile_keeps_missing_fields() {
        let mut u = user();
        u.update_profile(None, Some("Kowalska".to_string()), Some("+48123".to_string()));
        assert_eq!(u.first_name, "Anna");
        assert_eq!(u.last_name, "Kowalska");
        assert_eq!(u.phone.as_deref(), Some("+48123"));
    }

    #[test]
    fn test_role_helpers() {
        let mut u = user();
        assert!(!u.is_admin());
        u.role = Role::Landlord;
        assert!(u.is_landlord());
    }
}
