//! # Suggest Crate
//!
//! The "AI" name assistant for the NameFast storefront, which is
//! deliberately not AI. Suggestions come from deterministic strategies over the
//! visitor's keywords, tone, and industry, scored and merged, so results
//! are stable, testable, and free of any external service.
//!
//! ## Example Usage
//!
//! ```ignore
//! use suggest::{SuggestionEngine, SuggestionRequest, DEFAULT_SUGGESTION_COUNT};
//!
//! let engine = SuggestionEngine::new(&listings);
//! let request = SuggestionRequest {
//!     keywords: "fast, smart, innovative".to_string(),
//!     ..Default::default()
//! };
//! for s in engine.suggest(&request, DEFAULT_SUGGESTION_COUNT) {
//!     println!("{} (${}) score {}", s.name, s.price, s.score);
//! }
//! ```

pub mod engine;
pub mod request;

// Re-export main types
pub use engine::{DEFAULT_SUGGESTION_COUNT, Suggestion, SuggestionEngine};
pub use request::{LengthPreference, SuggestionRequest};
