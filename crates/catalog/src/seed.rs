//! Seed data loading.
//!
//! The catalog boots from three JSON files in a seed directory:
//! - domains.json: domain listings
//! - purchases.json: past and in-flight purchases
//! - perks.json: founder-pass perks
//!
//! All three files are read and deserialized in parallel, then validated
//! for structural problems (zero or duplicate ids, empty names) before
//! anything downstream sees them.

use crate::error::{CatalogError, Result};
use crate::store::Record;
use crate::types::{Listing, Perk, Purchase};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The deserialized, validated contents of a seed directory.
#[derive(Debug)]
pub struct SeedData {
    pub listings: Vec<Listing>,
    pub purchases: Vec<Purchase>,
    pub perks: Vec<Perk>,
}

/// Load and validate a full seed directory.
///
/// The three files are independent, so they are parsed with nested
/// `rayon::join` for three-way parallelism.
pub fn load(dir: &Path) -> Result<SeedData> {
    let domains_path = dir.join("domains.json");
    let purchases_path = dir.join("purchases.json");
    let perks_path = dir.join("perks.json");

    let ((listings, purchases), perks) = rayon::join(
        || {
            rayon::join(
                || load_file::<Listing>(&domains_path),
                || load_file::<Purchase>(&purchases_path),
            )
        },
        || load_file::<Perk>(&perks_path),
    );

    let listings = listings?;
    let purchases = purchases?;
    let perks = perks?;

    for listing in &listings {
        if listing.name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord {
                entity: Listing::ENTITY,
                id: listing.id,
                reason: "empty name".to_string(),
            });
        }
    }
    for purchase in &purchases {
        if purchase.domain_name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord {
                entity: Purchase::ENTITY,
                id: purchase.id,
                reason: "empty domain name".to_string(),
            });
        }
    }

    Ok(SeedData {
        listings,
        purchases,
        perks,
    })
}

/// Read one seed file into a record vector, checking ids as we go.
fn load_file<T: Record + DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)?;
    let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| CatalogError::Malformed {
        file: path.display().to_string(),
        source,
    })?;

    let mut seen = HashSet::new();
    for record in &records {
        let id = record.id();
        if id == 0 {
            return Err(CatalogError::InvalidRecord {
                entity: T::ENTITY,
                id,
                reason: "ids start at 1".to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                entity: T::ENTITY,
                id,
            });
        }
    }

    Ok(records)
}
