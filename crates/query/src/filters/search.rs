//! Free-text search over listing names and descriptions.

use crate::traits::Filter;
use catalog::Listing;

/// Keeps listings whose name OR description contains the pattern,
/// case-insensitively.
pub struct SearchFilter {
    /// Lowercased once at construction; `matches` only lowercases the
    /// listing side.
    pattern: String,
}

impl SearchFilter {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_lowercase(),
        }
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, listing: &Listing) -> bool {
        listing.name.to_lowercase().contains(&self.pattern)
            || listing.description.to_lowercase().contains(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Extension, ListingStatus};

    fn listing(name: &str, description: &str) -> Listing {
        Listing {
            id: 1,
            name: name.to_string(),
            category: Category::Technology,
            extension: Extension::Com,
            price: 1000,
            description: description.to_string(),
            status: ListingStatus::Approved,
            seller_id: "seller-123".to_string(),
            created_at: 1_700_000_000,
            updated_at: None,
        }
    }

    #[test]
    fn test_matches_name_case_insensitively() {
        let filter = SearchFilter::new("SWIFT");
        assert!(filter.matches(&listing("swiftventure.io", "")));
        assert!(!filter.matches(&listing("boostlab.net", "")));
    }

    #[test]
    fn test_matches_description_too() {
        let filter = SearchFilter::new("startup");
        assert!(filter.matches(&listing("boostlab.net", "Great for a Startup lab")));
    }

    #[test]
    fn test_apply_preserves_order() {
        let filter = SearchFilter::new("a");
        let listings = vec![
            listing("alpha.com", ""),
            listing("zzz.com", ""),
            listing("beta.com", ""),
        ];
        let kept = filter.apply(listings).unwrap();
        let names: Vec<&str> = kept.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.com", "beta.com"]);
    }
}
