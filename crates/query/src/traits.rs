//! Core traits for the listing filter pipeline.
//!
//! This module defines the Filter trait that allows composable filters
//! to be applied to a listing set.

use anyhow::Result;
use catalog::Listing;

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - `matches` is the per-listing predicate: pure, side-effect free, and
///   total for well-typed input
/// - `apply` takes ownership of the Vec<Listing> and returns a filtered
///   Vec preserving relative order, without cloning survivors
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single listing satisfies this filter's constraint.
    fn matches(&self, listing: &Listing) -> bool;

    /// Apply this filter to a set of listings, keeping matches in order.
    fn apply(&self, listings: Vec<Listing>) -> Result<Vec<Listing>> {
        Ok(listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .collect())
    }
}
