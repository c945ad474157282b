//! # Core Error Module
//!
//! This module defines the central `NasaError` type used throughout the library.
//! It leverages `thiserror` for error message formatting and `serde` for serialization.
//!
//! Only caller defects and configuration problems surface as `NasaError`.
//! Failures of the remote call itself are reported inside a
//! [`ResponseEnvelope`](crate::retrieve::envelope::ResponseEnvelope).

use serde::Serialize;
use thiserror::Error;

use crate::retrieve::envelope::ErrorKind;

/// Central error type for the `nasa_api_ng` library.
#[derive(Debug, Error, Serialize, Clone, PartialEq)]
pub enum NasaError {
    /// The operation name is not present in the endpoint registry.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A placeholder of the operation's path template received no value.
    #[error("Operation {operation} is missing path parameter '{param}'")]
    MissingPathParam {
        /// The operation whose path could not be resolved.
        operation: String,
        /// The placeholder name left without a value.
        param: String,
    },

    /// A path parameter value that cannot stand as a URL segment (`.` or `..`).
    #[error("Operation {operation} cannot use '{value}' for path parameter '{param}'")]
    InvalidPathParam {
        operation: String,
        param: String,
        value: String,
    },

    /// A provider base URL could not be parsed or cannot carry a path.
    #[error("Invalid base URL for provider {provider}: {url}")]
    InvalidBaseUrl {
        /// Provider slug.
        provider: String,
        /// The offending URL.
        url: String,
    },

    /// A date string supplied by the caller could not be understood.
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Error related to configuration loading or merging.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl NasaError {
    /// Taxonomy kind for the fail-fast errors that belong to the dispatch contract.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            NasaError::UnknownOperation(_) => Some(ErrorKind::UnknownOperation),
            NasaError::MissingPathParam { .. } | NasaError::InvalidPathParam { .. } => {
                Some(ErrorKind::MissingPathParam)
            }
            _ => None,
        }
    }
}
