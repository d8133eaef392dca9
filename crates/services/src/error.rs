//! Error types for the mock services.

use thiserror::Error;

/// Errors a service call can surface.
///
/// `Unavailable` is transient and belongs to the caller's retry policy;
/// the services themselves never retry or fall back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No record with this identifier.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },

    /// The simulated backend is offline.
    #[error("listing source unavailable")]
    Unavailable,
}

/// Convenience alias for Results in this crate.
pub type Result<T> = std::result::Result<T, ServiceError>;
