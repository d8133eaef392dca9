//! The listing service: CRUD over the domain catalog.
//!
//! This is the storefront's listing source. The store is injected, and
//! the service simulates the only failure the real source could
//! produce: a transient outage, toggled with [`ListingService::set_offline`].
//! Callers get the error unchanged; retrying is their decision.

use crate::error::{Result, ServiceError};
use crate::latency::Latency;
use crate::unix_now;
use catalog::{Category, Extension, Listing, ListingPatch, ListingStatus, MemoryStore, Record};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// Shared handle to a listing store.
pub type ListingStore = Arc<RwLock<MemoryStore<Listing>>>;

/// Fields a seller supplies when creating a listing. The service assigns
/// the id, stamps the creation time, and forces the status to
/// pending-approval.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub name: String,
    pub category: Category,
    pub extension: Extension,
    pub price: u64,
    pub description: String,
    pub seller_id: String,
}

/// Async CRUD facade over the listing store.
#[derive(Clone)]
pub struct ListingService {
    store: ListingStore,
    latency: Latency,
    offline: Arc<AtomicBool>,
}

impl ListingService {
    pub fn new(store: ListingStore) -> Self {
        Self {
            store,
            latency: Latency::default(),
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Configure the latency profile (builder pattern).
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Simulate a backend outage. While offline every call fails with
    /// [`ServiceError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.load(Ordering::Relaxed) {
            return Err(ServiceError::Unavailable);
        }
        Ok(())
    }

    /// All listings, in id order.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Listing>> {
        self.ensure_online()?;
        self.latency.read_delay().await;
        Ok(self.store.read().await.all())
    }

    /// One listing by id.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: u32) -> Result<Listing> {
        self.ensure_online()?;
        self.latency.read_delay().await;
        self.store.read().await.get(id).ok_or(ServiceError::NotFound {
            entity: Listing::ENTITY,
            id,
        })
    }

    /// Create a listing. Id is assigned as one greater than the current
    /// maximum; the listing starts pending approval.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn create(&self, new: NewListing) -> Result<Listing> {
        self.ensure_online()?;
        self.latency.write_delay().await;

        let listing = Listing {
            id: 0,
            name: new.name,
            category: new.category,
            extension: new.extension,
            price: new.price,
            description: new.description,
            status: ListingStatus::PendingApproval,
            seller_id: new.seller_id,
            created_at: unix_now(),
            updated_at: None,
        };
        let created = self.store.write().await.insert(listing);
        info!(id = created.id, name = %created.name, "listing created");
        Ok(created)
    }

    /// Merge a partial update into a listing and stamp `updated_at`.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: u32, patch: ListingPatch) -> Result<Listing> {
        self.ensure_online()?;
        self.latency.write_delay().await;

        self.store
            .write()
            .await
            .update(id, |listing| {
                patch.apply(listing);
                listing.updated_at = Some(unix_now());
            })
            .ok_or(ServiceError::NotFound {
                entity: Listing::ENTITY,
                id,
            })
    }

    /// Delete a listing, returning the removed record.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u32) -> Result<Listing> {
        self.ensure_online()?;
        self.latency.write_delay().await;

        self.store
            .write()
            .await
            .remove(id)
            .ok_or(ServiceError::NotFound {
                entity: Listing::ENTITY,
                id,
            })
    }
}
