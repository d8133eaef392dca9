//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while reading a seed file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A seed file is not valid JSON for the expected record shape.
    #[error("malformed seed file {file}: {source}")]
    Malformed {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Two records in one seed file share an identifier.
    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: u32 },

    /// A record fails a structural check (empty name, zero id, ...).
    #[error("invalid {entity} {id}: {reason}")]
    InvalidRecord {
        entity: &'static str,
        id: u32,
        reason: String,
    },

    /// A string does not parse as a known enumeration value.
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Convenience alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
