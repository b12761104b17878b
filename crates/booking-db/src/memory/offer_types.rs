//! In-memory OfferTypeRepository

use async_trait::async_trait;

use booking_core::entities::OfferType;
use booking_core::error::DomainError;
use booking_core::traits::{OfferTypeRepository, RepoResult};
use booking_core::value_objects::OfferTypeId;

use super::store::MemoryStore;

#[async_trait]
impl OfferTypeRepository for MemoryStore {
    async fn list(&self) -> RepoResult<Vec<OfferType>> {
        let mut types: Vec<OfferType> = self.offer_types.iter().map(|t| t.clone()).collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    async fn find_by_id(&self, id: OfferTypeId) -> RepoResult<Option<OfferType>> {
        Ok(self.offer_types.get(&id).map(|t| t.clone()))
    }

    async fn create(&self, offer_type: &OfferType) -> RepoResult<()> {
        let taken = self
            .offer_types
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(&offer_type.name));
        if taken {
            return Err(DomainError::OfferTypeExists(offer_type.name.clone()));
        }
        self.offer_types.insert(offer_type.id, offer_type.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_and_unique() {
        let store = MemoryStore::new();
        let types = store.list().await.unwrap();
        assert_eq!(types.len(), 5);
        assert_eq!(types[0].name, "Apartment");

        let dup = OfferType::new("house").unwrap();
        assert!(matches!(
            store.create(&dup).await,
            Err(DomainError::OfferTypeExists(_))
        ));

        let cabin = OfferType::new("Cabin").unwrap();
        store.create(&cabin).await.unwrap();
        assert_eq!(store.find_by_id(cabin.id).await.unwrap(), Some(cabin));
    }
}
