//! The founder-pass perk service.

use crate::error::{Result, ServiceError};
use crate::latency::Latency;
use crate::unix_now;
use catalog::{MemoryStore, Perk, Record};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

/// Shared handle to a perk store.
pub type PerkStore = Arc<RwLock<MemoryStore<Perk>>>;

/// Fields needed to add a perk to the pass.
#[derive(Debug, Clone)]
pub struct NewPerk {
    pub title: String,
    pub partner: String,
    pub description: String,
    pub value: u64,
}

/// Async CRUD facade over the perk store.
#[derive(Clone)]
pub struct PerkService {
    store: PerkStore,
    latency: Latency,
}

impl PerkService {
    pub fn new(store: PerkStore) -> Self {
        Self {
            store,
            latency: Latency::default(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// All perks, in id order.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Perk>> {
        self.latency.read_delay().await;
        Ok(self.store.read().await.all())
    }

    /// One perk by id.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: u32) -> Result<Perk> {
        self.latency.read_delay().await;
        self.store.read().await.get(id).ok_or(ServiceError::NotFound {
            entity: Perk::ENTITY,
            id,
        })
    }

    /// Add a perk.
    #[instrument(skip(self, new), fields(title = %new.title))]
    pub async fn create(&self, new: NewPerk) -> Result<Perk> {
        self.latency.write_delay().await;

        let perk = Perk {
            id: 0,
            title: new.title,
            partner: new.partner,
            description: new.description,
            value: new.value,
            created_at: unix_now(),
        };
        Ok(self.store.write().await.insert(perk))
    }

    /// Delete a perk, returning the removed record.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u32) -> Result<Perk> {
        self.latency.write_delay().await;

        self.store
            .write()
            .await
            .remove(id)
            .ok_or(ServiceError::NotFound {
                entity: Perk::ENTITY,
                id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_perk_lifecycle() {
        let store = Arc::new(RwLock::new(MemoryStore::new()));
        let service = PerkService::new(store).with_latency(Latency::none());

        let created = service
            .create(NewPerk {
                title: "Cloud credits".to_string(),
                partner: "Acme Cloud".to_string(),
                description: "$500 in credits for new accounts".to_string(),
                value: 500,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        assert_eq!(service.fetch_all().await.unwrap().len(), 1);
        assert_eq!(service.fetch(1).await.unwrap().partner, "Acme Cloud");

        let removed = service.delete(1).await.unwrap();
        assert_eq!(removed.title, "Cloud credits");
        assert!(service.fetch_all().await.unwrap().is_empty());
    }
}
