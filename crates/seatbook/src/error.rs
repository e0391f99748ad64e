//! Error types for seatbook.
//!
//! This module defines all error types used throughout the seatbook crate.
//! Reservation rejections (full flight, duplicate national ID) are not errors;
//! see [`crate::ledger::ReservationOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for seatbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Input Validation Errors ===
    /// User input was rejected before it reached the ledger.
    #[error("{message}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Message suitable for showing to the user.
        message: String,
    },

    // === Storage Errors ===
    /// The ledger file was written by a newer, unsupported format version.
    #[error("unsupported ledger file version {found} in {path} (supported: {supported})")]
    UnsupportedVersion {
        /// Path to the ledger file.
        path: PathBuf,
        /// Version found in the file.
        found: u32,
        /// Highest version this build understands.
        supported: u32,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for seatbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error for the given field.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a new configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error came from input validation.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error is a storage failure (I/O, encoding, or format).
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::Json(_)
                | Self::DirectoryCreate { .. }
                | Self::UnsupportedVersion { .. }
        )
    }
}
