//! Exact-match filters over the fixed listing taxonomies.
//!
//! Both filters compare against the enumeration wire form, the same
//! string the browse sidebar submits. A value that names no known
//! category or extension simply matches nothing.

use crate::traits::Filter;
use catalog::Listing;

/// Keeps listings in one category.
pub struct CategoryFilter {
    value: String,
}

impl CategoryFilter {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.category.as_str() == self.value
    }
}

/// Keeps listings under one extension.
pub struct ExtensionFilter {
    value: String,
}

impl ExtensionFilter {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl Filter for ExtensionFilter {
    fn name(&self) -> &str {
        "ExtensionFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.extension.as_str() == self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Extension, ListingStatus};

    fn listing(category: Category, extension: Extension) -> Listing {
        Listing {
            id: 1,
            name: "example.com".to_string(),
            category,
            extension,
            price: 1000,
            description: String::new(),
            status: ListingStatus::Approved,
            seller_id: "seller-123".to_string(),
            created_at: 1_700_000_000,
            updated_at: None,
        }
    }

    #[test]
    fn test_category_exact_match() {
        let filter = CategoryFilter::new("Real Estate");
        assert!(filter.matches(&listing(Category::RealEstate, Extension::Com)));
        assert!(!filter.matches(&listing(Category::Finance, Extension::Com)));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let filter = CategoryFilter::new("Astrology");
        assert!(!filter.matches(&listing(Category::Technology, Extension::Com)));
    }

    #[test]
    fn test_extension_exact_match() {
        let filter = ExtensionFilter::new(".io");
        assert!(filter.matches(&listing(Category::Technology, Extension::Io)));
        assert!(!filter.matches(&listing(Category::Technology, Extension::Ai)));
    }
}
