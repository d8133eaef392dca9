//! Error type for storefront operations.

use crate::forms::FieldError;
use services::ServiceError;
use thiserror::Error;

/// Errors a storefront operation can surface to its caller.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// A form failed validation; every offending field is listed.
    #[error("form validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// A backing service failed; passed through unchanged so callers can
    /// distinguish a missing record from an outage.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The query pipeline failed.
    #[error("query pipeline failed: {0}")]
    Pipeline(anyhow::Error),
}

impl From<anyhow::Error> for StorefrontError {
    fn from(err: anyhow::Error) -> Self {
        StorefrontError::Pipeline(err)
    }
}

/// Convenience alias for Results in this crate.
pub type Result<T> = std::result::Result<T, StorefrontError>;
