//! Error types for the rite_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for rite_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Ledger consistency error (duplicate ids, missing references)
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// Booking flow error (bad input, disallowed status change)
    #[error("Booking error: {0}")]
    Booking(String),

    /// A catalog or ledger entity was looked up by id and not found
    #[error("{0} not found")]
    NotFound(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
