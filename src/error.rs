//! Error types for the monday.com client.
//!
//! This module contains error types used for configuration and validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use monday_async::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid monday.com API token.")]
    EmptyApiToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-04').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api.monday.com/v2').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}': header names and values must be visible ASCII.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}
