//! Error types for the facts crate.
//!
//! Composing and rendering facts never fails; these errors only come from
//! loading configuration.

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum FactsError {
    /// The configuration file exists but could not be read.
    #[error("failed to load config: {path}: {message}")]
    Load { path: String, message: String },

    /// The configuration text is not valid.
    #[error("failed to parse config: {message}")]
    Parse { message: String },
}

/// Result type for configuration operations.
pub type FactsResult<T> = Result<T, FactsError>;
