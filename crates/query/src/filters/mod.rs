//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod length;
pub mod price;
pub mod search;
pub mod taxonomy;

// Re-export for convenience
pub use length::NameLengthFilter;
pub use price::PriceRangeFilter;
pub use search::SearchFilter;
pub use taxonomy::{CategoryFilter, ExtensionFilter};
