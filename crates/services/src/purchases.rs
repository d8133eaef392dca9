//! The purchase service: CRUD over checkout records.

use crate::error::{Result, ServiceError};
use crate::latency::Latency;
use crate::unix_now;
use catalog::{
    ListingId, MemoryStore, PaymentMethod, Purchase, PurchasePatch, PurchaseStatus, Record,
    TransferStatus,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// Shared handle to a purchase store.
pub type PurchaseStore = Arc<RwLock<MemoryStore<Purchase>>>;

/// Fields captured at checkout. The service assigns the id and stamps
/// the initial state: payment processing, transfer initiated.
#[derive(Debug, Clone)]
pub struct NewPurchase {
    pub listing_id: ListingId,
    pub domain_name: String,
    pub buyer_email: String,
    pub buyer_name: String,
    pub company: String,
    pub phone: String,
    pub amount: u64,
    pub payment_method: PaymentMethod,
}

/// Async CRUD facade over the purchase store.
#[derive(Clone)]
pub struct PurchaseService {
    store: PurchaseStore,
    latency: Latency,
}

impl PurchaseService {
    pub fn new(store: PurchaseStore) -> Self {
        Self {
            store,
            latency: Latency::default(),
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// All purchases, in id order.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Purchase>> {
        self.latency.read_delay().await;
        Ok(self.store.read().await.all())
    }

    /// One purchase by id.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: u32) -> Result<Purchase> {
        self.latency.read_delay().await;
        self.store.read().await.get(id).ok_or(ServiceError::NotFound {
            entity: Purchase::ENTITY,
            id,
        })
    }

    /// Record a new purchase.
    #[instrument(skip(self, new), fields(domain = %new.domain_name))]
    pub async fn create(&self, new: NewPurchase) -> Result<Purchase> {
        self.latency.write_delay().await;

        let purchase = Purchase {
            id: 0,
            listing_id: new.listing_id,
            domain_name: new.domain_name,
            buyer_email: new.buyer_email,
            buyer_name: new.buyer_name,
            company: new.company,
            phone: new.phone,
            amount: new.amount,
            payment_method: new.payment_method,
            status: PurchaseStatus::Processing,
            transfer_status: TransferStatus::Initiated,
            purchase_date: unix_now(),
            updated_at: None,
        };
        let created = self.store.write().await.insert(purchase);
        info!(id = created.id, domain = %created.domain_name, "purchase recorded");
        Ok(created)
    }

    /// Merge a partial update into a purchase and stamp `updated_at`.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: u32, patch: PurchasePatch) -> Result<Purchase> {
        self.latency.write_delay().await;

        self.store
            .write()
            .await
            .update(id, |purchase| {
                patch.apply(purchase);
                purchase.updated_at = Some(unix_now());
            })
            .ok_or(ServiceError::NotFound {
                entity: Purchase::ENTITY,
                id,
            })
    }

    /// Delete a purchase, returning the removed record.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u32) -> Result<Purchase> {
        self.latency.write_delay().await;

        self.store
            .write()
            .await
            .remove(id)
            .ok_or(ServiceError::NotFound {
                entity: Purchase::ENTITY,
                id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PurchaseService {
        let store = Arc::new(RwLock::new(MemoryStore::new()));
        PurchaseService::new(store).with_latency(Latency::none())
    }

    fn new_purchase(domain: &str, email: &str) -> NewPurchase {
        NewPurchase {
            listing_id: 1,
            domain_name: domain.to_string(),
            buyer_email: email.to_string(),
            buyer_name: "Ada Lovelace".to_string(),
            company: String::new(),
            phone: String::new(),
            amount: 1800,
            payment_method: PaymentMethod::Stripe,
        }
    }

    #[tokio::test]
    async fn test_create_stamps_initial_state() {
        let service = service();

        let created = service
            .create(new_purchase("swiftventure.io", "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.status, PurchaseStatus::Processing);
        assert_eq!(created.transfer_status, TransferStatus::Initiated);
        assert!(created.purchase_date > 0);
    }

    #[tokio::test]
    async fn test_update_transfer_progress() {
        let service = service();
        let created = service
            .create(new_purchase("swiftventure.io", "ada@example.com"))
            .await
            .unwrap();

        let patch = PurchasePatch {
            status: Some(PurchaseStatus::Completed),
            transfer_status: Some(TransferStatus::Completed),
        };
        let updated = service.update(created.id, patch).await.unwrap();

        assert_eq!(updated.status, PurchaseStatus::Completed);
        assert_eq!(updated.transfer_status, TransferStatus::Completed);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_missing_purchase_is_not_found() {
        let service = service();
        assert_eq!(
            service.fetch(42).await.unwrap_err(),
            ServiceError::NotFound {
                entity: "purchase",
                id: 42
            }
        );
    }
}
