//! Pipeline for filtering, sorting, and paginating domain listings.
//!
//! This crate provides:
//! - Filter trait and implementations for listing predicates
//! - FilterPipeline for composing the active filters of a FilterSpec
//! - Sort-key selection with stable ordering
//! - Pagination arithmetic, including the abbreviated page strip
//! - `execute`, the end-to-end filter → sort → paginate pipeline
//!
//! ## Architecture
//! The pipeline processes a listing snapshot in stages:
//! 1. Filters reduce the set (search, taxonomy, price, length)
//! 2. The sort key orders what remains (stable, so ties keep input order)
//! 3. Pagination slices out one page and derives display metadata
//!
//! The whole pipeline is pure: it owns its working copy, touches no
//! shared state, and does no I/O. Fetching the snapshot, and any retry
//! policy when the listing source is unavailable, belongs to the caller.
//!
//! ## Example Usage
//! ```ignore
//! use query::{execute, FilterSpec};
//!
//! let spec = FilterSpec {
//!     search: "tech".to_string(),
//!     max_price: "2500".to_string(),
//!     sort_by: "price-low".to_string(),
//!     ..Default::default()
//! };
//!
//! let page = execute(listings, &spec, 1)?;
//! println!("Showing {}–{} of {}", page.start_record, page.end_record, page.total_matches);
//! ```

pub mod filter_pipeline;
pub mod filter_spec;
pub mod filters;
pub mod page;
pub mod pipeline;
pub mod sort;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use filter_spec::{FilterSpec, PAGE_SIZE, parse_bound};
pub use page::{PageItem, page_count, page_window, slice_bounds};
pub use pipeline::{PageResult, execute};
pub use sort::{SortKey, apply_sort};
pub use traits::Filter;
