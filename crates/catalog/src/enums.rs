//! Shared enumerations for the marketplace.
//!
//! The storefront surfaces these lists in several places (browse filters,
//! the seller form, the suggestion assistant), so they live in exactly one
//! module. Each enum carries its wire form (the string the mock JSON and
//! the filter layer use) via `as_str`, `Display`, and `FromStr`.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marketplace category of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Business,
    Health,
    Finance,
    Education,
    Entertainment,
    Food,
    Travel,
    Fashion,
    #[serde(rename = "Real Estate")]
    RealEstate,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 10] = [
        Category::Technology,
        Category::Business,
        Category::Health,
        Category::Finance,
        Category::Education,
        Category::Entertainment,
        Category::Food,
        Category::Travel,
        Category::Fashion,
        Category::RealEstate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Health => "Health",
            Category::Finance => "Finance",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Fashion => "Fashion",
            Category::RealEstate => "Real Estate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// Top-level domain extension a listing is sold under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extension {
    #[serde(rename = ".com")]
    Com,
    #[serde(rename = ".io")]
    Io,
    #[serde(rename = ".net")]
    Net,
    #[serde(rename = ".org")]
    Org,
    #[serde(rename = ".co")]
    Co,
    #[serde(rename = ".app")]
    App,
    #[serde(rename = ".dev")]
    Dev,
    #[serde(rename = ".tech")]
    Tech,
    #[serde(rename = ".ai")]
    Ai,
}

impl Extension {
    /// Every extension, in display order.
    pub const ALL: [Extension; 9] = [
        Extension::Com,
        Extension::Io,
        Extension::Net,
        Extension::Org,
        Extension::Co,
        Extension::App,
        Extension::Dev,
        Extension::Tech,
        Extension::Ai,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Com => ".com",
            Extension::Io => ".io",
            Extension::Net => ".net",
            Extension::Org => ".org",
            Extension::Co => ".co",
            Extension::App => ".app",
            Extension::Dev => ".dev",
            Extension::Tech => ".tech",
            Extension::Ai => ".ai",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = CatalogError;

    /// Accepts the wire form with or without the leading dot
    /// (`".io"` and `"io"` both parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Extension::ALL
            .iter()
            .find(|e| {
                e.as_str() == trimmed || e.as_str().trim_start_matches('.') == trimmed
            })
            .copied()
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "extension",
                value: s.to_string(),
            })
    }
}

/// Moderation state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    PendingApproval,
    Approved,
    Rejected,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::PendingApproval => "pending-approval",
            ListingStatus::Approved => "approved",
            ListingStatus::Rejected => "rejected",
        }
    }

    /// Human-readable form, e.g. "Pending Approval".
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::PendingApproval => "Pending Approval",
            ListingStatus::Approved => "Approved",
            ListingStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment state of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl PurchaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Processing => "processing",
            PurchaseStatus::Completed => "completed",
            PurchaseStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of the domain transfer that follows a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransferStatus {
    Initiated,
    InProgress,
    AwaitingAction,
    Completed,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Initiated => "initiated",
            TransferStatus::InProgress => "in-progress",
            TransferStatus::AwaitingAction => "awaiting-action",
            TransferStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment processor selected at checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    Stripe,
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Stripe => "stripe",
            PaymentMethod::Paypal => "paypal",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Naming tone requested from the suggestion assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Professional,
    Creative,
    Modern,
    Playful,
    Elegant,
    Bold,
    Minimalist,
    #[serde(rename = "Tech-focused")]
    TechFocused,
}

impl Tone {
    /// Every tone, in display order.
    pub const ALL: [Tone; 8] = [
        Tone::Professional,
        Tone::Creative,
        Tone::Modern,
        Tone::Playful,
        Tone::Elegant,
        Tone::Bold,
        Tone::Minimalist,
        Tone::TechFocused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Creative => "Creative",
            Tone::Modern => "Modern",
            Tone::Playful => "Playful",
            Tone::Elegant => "Elegant",
            Tone::Bold => "Bold",
            Tone::Minimalist => "Minimalist",
            Tone::TechFocused => "Tech-focused",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "tone",
                value: s.to_string(),
            })
    }
}
