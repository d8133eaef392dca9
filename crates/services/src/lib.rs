//! # Services Crate
//!
//! Mock backend services for the NameFast storefront.
//!
//! There is no real backend anywhere: each service here is an async CRUD
//! facade over an injected in-memory store, with artificial latency so
//! the callers exercise genuine async boundaries.
//!
//! ## Components
//!
//! - **ListingService**: the listing source: catalog CRUD plus a
//!   simulated-outage switch (`Unavailable` is the one transient error)
//! - **PurchaseService**: checkout records and transfer progress
//! - **PerkService**: founder-pass perks
//! - **Latency**: the per-operation delay profile (none for tests)
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::MemoryStore;
//! use services::{Latency, ListingService};
//! use std::sync::Arc;
//! use tokio::sync::RwLock;
//!
//! let store = Arc::new(RwLock::new(MemoryStore::from_records(seed.listings)?));
//! let listings = ListingService::new(store).with_latency(Latency::none());
//!
//! let all = listings.fetch_all().await?;
//! ```

// Public modules
pub mod error;
pub mod latency;
pub mod listings;
pub mod perks;
pub mod purchases;

// Re-export commonly used types
pub use error::{Result, ServiceError};
pub use latency::Latency;
pub use listings::{ListingService, ListingStore, NewListing};
pub use perks::{NewPerk, PerkService, PerkStore};
pub use purchases::{NewPurchase, PurchaseService, PurchaseStore};

use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix time in seconds. Falls back to 0 if the clock is set
/// before the epoch, which keeps record stamping infallible.
pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
