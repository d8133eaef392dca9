//! # Catalog Crate
//!
//! Domain model and storage for the NameFast marketplace.
//!
//! ## Main Components
//!
//! - **types**: record types (Listing, Purchase, Perk) and their patches
//! - **enums**: the shared enumerations (categories, extensions, statuses)
//! - **store**: generic in-memory `MemoryStore` keyed by record id
//! - **seed**: parallel JSON seed loading with validation
//! - **error**: error types for loading and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{seed, MemoryStore};
//! use std::path::Path;
//!
//! let data = seed::load(Path::new("data/seed"))?;
//! let listings = MemoryStore::from_records(data.listings)?;
//!
//! let listing = listings.get(1).unwrap();
//! println!("{} asks ${}", listing.name, listing.price);
//! ```

// Public modules
pub mod enums;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use enums::{
    Category, Extension, ListingStatus, PaymentMethod, PurchaseStatus, Tone, TransferStatus,
};
pub use error::{CatalogError, Result};
pub use seed::SeedData;
pub use store::{MemoryStore, Record};
pub use types::{
    Listing, ListingId, ListingPatch, Perk, PerkId, Purchase, PurchaseId, PurchasePatch,
};
