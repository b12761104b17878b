//! In-memory UserRepository

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;

use booking_core::entities::User;
use booking_core::error::DomainError;
use booking_core::traits::{RepoResult, UserRepository};
use booking_core::value_objects::UserId;

use super::store::{MemoryStore, UserRecord};

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

impl MemoryStore {
    /// Claim `phone` for `owner`, failing if another user holds it
    fn claim_phone(&self, phone: &str, owner: UserId) -> RepoResult<()> {
        match self.phones.entry(phone.to_string()) {
            Entry::Occupied(entry) if *entry.get() != owner => Err(DomainError::PhoneAlreadyExists),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(entry) => {
                entry.insert(owner);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.users.get(&id).map(|record| record.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let owner = self.emails.get(&email_key(email)).map(|entry| *entry.value());
        Ok(owner.and_then(|id| self.users.get(&id).map(|record| record.user.clone())))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.emails.contains_key(&email_key(email)))
    }

    async fn phone_exists(&self, phone: &str) -> RepoResult<bool> {
        Ok(self.phones.contains_key(phone))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        match self.emails.entry(email_key(&user.email)) {
            Entry::Occupied(_) => return Err(DomainError::EmailAlreadyExists),
            Entry::Vacant(entry) => {
                entry.insert(user.id);
            }
        }

        if let Some(phone) = &user.phone {
            if let Err(e) = self.claim_phone(phone, user.id) {
                self.emails.remove(&email_key(&user.email));
                return Err(e);
            }
        }

        self.users.insert(
            user.id,
            UserRecord {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let previous_phone = match self.users.get(&user.id) {
            Some(record) => record.user.phone.clone(),
            None => return Err(DomainError::UserNotFound(user.id)),
        };

        if previous_phone != user.phone {
            if let Some(phone) = &user.phone {
                self.claim_phone(phone, user.id)?;
            }
            if let Some(old) = previous_phone {
                self.phones.remove(&old);
            }
        }

        let mut record = self
            .users
            .get_mut(&user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        record.user.first_name.clone_from(&user.first_name);
        record.user.last_name.clone_from(&user.last_name);
        record.user.phone.clone_from(&user.phone);
        record.user.updated_at = user.updated_at;
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .get(&id)
            .filter(|record| record.user.is_active)
            .map(|record| record.password_hash.clone()))
    }
}
