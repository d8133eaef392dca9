//! Core record types for the marketplace catalog.
//!
//! Field names serialize in the camelCase wire shape the mock dataset
//! uses (`Id`, `createdAt`, `sellerId`, ...). Timestamps are Unix seconds.

use crate::enums::{
    Category, Extension, ListingStatus, PaymentMethod, PurchaseStatus, TransferStatus,
};
use crate::store::Record;
use serde::{Deserialize, Serialize};

/// Unique identifier for a domain listing.
pub type ListingId = u32;

/// Unique identifier for a purchase.
pub type PurchaseId = u32;

/// Unique identifier for a founder-pass perk.
pub type PerkId = u32;

/// A domain name offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "Id")]
    pub id: ListingId,
    pub name: String,
    pub category: Category,
    pub extension: Extension,
    /// Asking price in whole dollars.
    pub price: u64,
    pub description: String,
    pub status: ListingStatus,
    pub seller_id: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Record for Listing {
    const ENTITY: &'static str = "domain";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Partial update to a [`Listing`]; only present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub extension: Option<Extension>,
    pub price: Option<u64>,
    pub description: Option<String>,
    pub status: Option<ListingStatus>,
}

impl ListingPatch {
    /// Merge present fields into `listing`. Timestamp stamping is the
    /// caller's job, since only the service layer knows the clock.
    pub fn apply(&self, listing: &mut Listing) {
        if let Some(name) = &self.name {
            listing.name = name.clone();
        }
        if let Some(category) = self.category {
            listing.category = category;
        }
        if let Some(extension) = self.extension {
            listing.extension = extension;
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(description) = &self.description {
            listing.description = description.clone();
        }
        if let Some(status) = self.status {
            listing.status = status;
        }
    }
}

/// A completed or in-flight domain purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(rename = "Id")]
    pub id: PurchaseId,
    pub listing_id: ListingId,
    pub domain_name: String,
    pub buyer_email: String,
    pub buyer_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    /// Amount paid in whole dollars.
    pub amount: u64,
    pub payment_method: PaymentMethod,
    pub status: PurchaseStatus,
    pub transfer_status: TransferStatus,
    pub purchase_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Record for Purchase {
    const ENTITY: &'static str = "purchase";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Partial update to a [`Purchase`].
#[derive(Debug, Clone, Default)]
pub struct PurchasePatch {
    pub status: Option<PurchaseStatus>,
    pub transfer_status: Option<TransferStatus>,
}

impl PurchasePatch {
    pub fn apply(&self, purchase: &mut Purchase) {
        if let Some(status) = self.status {
            purchase.status = status;
        }
        if let Some(transfer_status) = self.transfer_status {
            purchase.transfer_status = transfer_status;
        }
    }
}

/// A founder-pass perk bundled with every purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perk {
    #[serde(rename = "Id")]
    pub id: PerkId,
    pub title: String,
    pub partner: String,
    pub description: String,
    /// Nominal value of the perk in whole dollars.
    pub value: u64,
    pub created_at: i64,
}

impl Record for Perk {
    const ENTITY: &'static str = "perk";

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}
