//! The FilterPipeline composes the active filters of a FilterSpec.
//!
//! Filters are applied in sequence; since every filter is a pure
//! per-listing predicate, the order never changes the result (AND is
//! commutative), only which filter gets to discard a listing first.

use crate::filter_spec::{FilterSpec, parse_bound};
use crate::filters::{
    CategoryFilter, ExtensionFilter, NameLengthFilter, PriceRangeFilter, SearchFilter,
};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Listing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter::new("tech"))
///     .add_filter(PriceRangeFilter::new(Some(500), None));
///
/// let matching = pipeline.apply(listings)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline. An empty pipeline accepts
    /// every listing (each absent field is vacuously true).
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the pipeline for a [`FilterSpec`], adding one filter per
    /// present field. Numeric bounds that do not parse are skipped:
    /// untrusted input degrades to "unconstrained", never to an error.
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let mut pipeline = FilterPipeline::new();

        if !spec.search.is_empty() {
            pipeline = pipeline.add_filter(SearchFilter::new(&spec.search));
        }
        if !spec.category.is_empty() {
            pipeline = pipeline.add_filter(CategoryFilter::new(&spec.category));
        }
        if !spec.extension.is_empty() {
            pipeline = pipeline.add_filter(ExtensionFilter::new(&spec.extension));
        }

        let min_price = parse_bound::<u64>(&spec.min_price);
        let max_price = parse_bound::<u64>(&spec.max_price);
        if min_price.is_some() || max_price.is_some() {
            pipeline = pipeline.add_filter(PriceRangeFilter::new(min_price, max_price));
        }

        let min_length = parse_bound::<usize>(&spec.min_length);
        let max_length = parse_bound::<usize>(&spec.max_length);
        if min_length.is_some() || max_length.is_some() {
            pipeline = pipeline.add_filter(NameLengthFilter::new(min_length, max_length));
        }

        pipeline
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// The input is consumed; the output is a new sequence preserving
    /// the input's relative order.
    pub fn apply(&self, listings: Vec<Listing>) -> Result<Vec<Listing>> {
        let mut current = listings;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }

    /// Number of active filters (mostly useful in tests).
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
