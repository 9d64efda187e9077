//! Error types for the metadata persistence engine.
//!
//! Domain-specific errors (configuration, structural validation, GGM properties validation) are
//! defined in submodules and aggregated, together with database and I/O errors, into the single
//! [`Error`] type used across repositories and services. All errors use `thiserror` for their
//! `Display` and `Error` implementations.

pub mod config;
pub mod ggm;
pub mod validation;

use thiserror::Error;

use crate::server::error::{config::ConfigError, ggm::GgmError, validation::ValidationError};

/// Main error type for the metadata persistence engine.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying error types convert automatically
/// through the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Structural validation errors (missing required fields or arrays)
/// - GGM properties validation errors (all-or-nothing saver)
/// - External library errors (database, JSON decoding, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Submission is missing required data or failed a dependency check.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// GGM properties failed validation or vocabulary resolution.
    #[error(transparent)]
    GgmError(#[from] GgmError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the persistence code.
    ///
    /// This error should never occur in normal operation and indicates a programming error.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Submission document could not be decoded.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Submission document could not be read.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
