//! Error types for folio.
//!
//! This module defines the crate-level error type used by configuration,
//! data loading, routing and the site builder. Form validation failures and
//! malformed project records are not errors in this sense: they are reported
//! through [`crate::contact::ContactFormErrors`] and
//! [`crate::project::MalformedRecord`] and never abort an operation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for folio operations.
#[derive(Error, Debug)]
pub enum Error {
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

    // === Project Data Errors ===
    /// A project data file could not be parsed.
    #[error("failed to parse project data at {path}: {source}")]
    ProjectData {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Two project entries share an id.
    #[error("duplicate project id '{id}'")]
    DuplicateProjectId {
        /// The repeated id.
        id: String,
    },

    // === Routing Errors ===
    /// No view is registered for the path.
    #[error("no page for route '{path}'")]
    UnknownRoute {
        /// The requested path.
        path: String,
    },

    // === Form Errors ===
    /// A field name that the contact form does not have.
    #[error("unknown contact form field '{name}'")]
    UnknownField {
        /// The field name supplied by the caller.
        name: String,
    },

    // === I/O Errors ===
    /// Failed to read an input or existing output file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path of the file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
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

    /// Failed to write a rendered page.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the file being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create an unknown route error.
    #[must_use]
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute { path: path.into() }
    }

    /// Check if this error is an unknown route.
    #[must_use]
    pub fn is_unknown_route(&self) -> bool {
        matches!(self, Self::UnknownRoute { .. })
    }
}
