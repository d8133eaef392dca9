//! The filter specification: everything the browse view lets a visitor set.
//!
//! All values are carried as the raw strings the UI hands over. Empty means
//! "no constraint". Numeric bounds are parsed leniently when the predicates
//! are built: a value that does not parse imposes no constraint, it never
//! errors. Filter inputs are untrusted.

use std::str::FromStr;

/// Listings shown per page. Fixed, not user-configurable.
pub const PAGE_SIZE: usize = 9;

/// User-chosen constraints narrowing the listing set.
///
/// The net predicate is the conjunction of every present field's
/// predicate; absent fields are vacuously true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against name or description.
    pub search: String,
    /// Exact category wire form ("Technology", "Real Estate", ...).
    pub category: String,
    /// Exact extension wire form (".com", ".io", ...).
    pub extension: String,
    /// Inclusive lower price bound.
    pub min_price: String,
    /// Inclusive upper price bound.
    pub max_price: String,
    /// Inclusive lower bound on name character count.
    pub min_length: String,
    /// Inclusive upper bound on name character count.
    pub max_length: String,
    /// Sort key ("newest", "oldest", "price-low", "price-high", "name").
    /// Unknown or empty leaves the input order untouched.
    pub sort_by: String,
}

impl FilterSpec {
    /// A spec with no constraints and no ordering.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// True when no filter field is set (ordering aside).
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.category.is_empty()
            && self.extension.is_empty()
            && parse_bound::<u64>(&self.min_price).is_none()
            && parse_bound::<u64>(&self.max_price).is_none()
            && parse_bound::<usize>(&self.min_length).is_none()
            && parse_bound::<usize>(&self.max_length).is_none()
    }
}

/// Lenient numeric parse for untrusted filter input.
///
/// Whitespace is trimmed; anything that is not a plain non-negative
/// integer ("abc", "-5", "1.5", "") yields `None`, i.e. unconstrained.
pub fn parse_bound<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
