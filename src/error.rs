//! Error types for the widget's external resources.
//!
//! None of these cross the widget boundary: the switcher logs and absorbs
//! them, falling back to built-in themes or in-memory preferences.

use thiserror::Error;

/// Failure to obtain a usable theme catalog
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Network error or fetch rejected before a response arrived
    #[error("catalog unreachable: {0}")]
    Unreachable(String),

    /// Server answered with a non-success status
    #[error("catalog request failed with HTTP {0}")]
    Status(u16),

    /// Body was not a JSON array
    #[error("catalog is not a JSON array: {0}")]
    Malformed(String),

    /// JSON array with no entries
    #[error("catalog is empty")]
    Empty,
}

/// Failure to read or write the preference store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend (disabled, sandboxed iframe, private mode)
    #[error("preference storage unavailable")]
    Unavailable,

    /// Backend rejected the operation (quota, security error)
    #[error("preference storage rejected operation: {0}")]
    Rejected(String),
}
