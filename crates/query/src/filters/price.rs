//! Inclusive price-range filter.

use crate::traits::Filter;
use catalog::Listing;

/// Keeps listings whose price lies within the inclusive bounds.
/// An absent bound is unbounded on that side.
pub struct PriceRangeFilter {
    min: Option<u64>,
    max: Option<u64>,
}

impl PriceRangeFilter {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }
}

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        self.min.is_none_or(|min| listing.price >= min)
            && self.max.is_none_or(|max| listing.price <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Extension, ListingStatus};

    fn listing(price: u64) -> Listing {
        Listing {
            id: 1,
            name: "example.com".to_string(),
            category: Category::Technology,
            extension: Extension::Com,
            price,
            description: String::new(),
            status: ListingStatus::Approved,
            seller_id: "seller-123".to_string(),
            created_at: 1_700_000_000,
            updated_at: None,
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let filter = PriceRangeFilter::new(Some(100), Some(200));
        assert!(filter.matches(&listing(100)));
        assert!(filter.matches(&listing(200)));
        assert!(!filter.matches(&listing(99)));
        assert!(!filter.matches(&listing(201)));
    }

    #[test]
    fn test_absent_bound_is_unbounded() {
        let min_only = PriceRangeFilter::new(Some(60), None);
        assert!(min_only.matches(&listing(1_000_000)));
        assert!(!min_only.matches(&listing(50)));

        let max_only = PriceRangeFilter::new(None, Some(60));
        assert!(max_only.matches(&listing(0)));

        let unbounded = PriceRangeFilter::new(None, None);
        assert!(unbounded.matches(&listing(42)));
    }
}
