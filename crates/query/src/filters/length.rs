//! Name-length filter.

use crate::traits::Filter;
use catalog::Listing;

/// Keeps listings whose full name (extension included) has a character
/// count within the inclusive bounds. Counts characters, not bytes.
pub struct NameLengthFilter {
    min: Option<usize>,
    max: Option<usize>,
}

impl NameLengthFilter {
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Filter for NameLengthFilter {
    fn name(&self) -> &str {
        "NameLengthFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        let len = listing.name.chars().count();
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Extension, ListingStatus};

    fn listing(name: &str) -> Listing {
        Listing {
            id: 1,
            name: name.to_string(),
            category: Category::Technology,
            extension: Extension::Com,
            price: 1000,
            description: String::new(),
            status: ListingStatus::Approved,
            seller_id: "seller-123".to_string(),
            created_at: 1_700_000_000,
            updated_at: None,
        }
    }

    #[test]
    fn test_inclusive_length_bounds() {
        // "abcd.com" is 8 characters
        let filter = NameLengthFilter::new(Some(8), Some(8));
        assert!(filter.matches(&listing("abcd.com")));
        assert!(!filter.matches(&listing("abcde.com")));
        assert!(!filter.matches(&listing("abc.com")));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // "café.com" is 8 characters but 9 bytes
        let filter = NameLengthFilter::new(None, Some(8));
        assert!(filter.matches(&listing("café.com")));
    }
}
