//! Configuration types for the monday.com client.
//!
//! # Overview
//!
//! - [`MondayConfig`]: everything a client needs to talk to the API
//! - [`MondayConfigBuilder`]: a builder for constructing [`MondayConfig`]
//! - [`ApiToken`]: a validated API token with masked debug output
//! - [`EndpointUrl`]: a validated endpoint URL
//! - [`ApiVersion`]: the monday.com API version to request
//!
//! # Example
//!
//! ```rust
//! use monday_async::{ApiToken, ApiVersion, MondayConfig};
//!
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V2024_10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://api.monday.com/v2");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiToken, EndpointUrl};
pub use version::ApiVersion;

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Default monday.com GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.monday.com/v2";

/// Default monday.com file upload endpoint.
pub const DEFAULT_FILE_ENDPOINT: &str = "https://api.monday.com/v2/file";

/// Configuration for a [`MondayClient`](crate::MondayClient).
///
/// # Thread Safety
///
/// `MondayConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use monday_async::{ApiToken, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("my-token").unwrap())
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.tries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct MondayConfig {
    api_token: ApiToken,
    api_version: ApiVersion,
    endpoint: EndpointUrl,
    file_endpoint: EndpointUrl,
    user_agent_prefix: Option<String>,
    extra_headers: HashMap<String, String>,
    tries: u32,
    timeout: Option<Duration>,
}

impl MondayConfig {
    /// Creates a new builder for constructing a `MondayConfig`.
    #[must_use]
    pub fn builder() -> MondayConfigBuilder {
        MondayConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the file upload endpoint.
    #[must_use]
    pub const fn file_endpoint(&self) -> &EndpointUrl {
        &self.file_endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the extra headers sent with every request.
    #[must_use]
    pub const fn extra_headers(&self) -> &HashMap<String, String> {
        &self.extra_headers
    }

    /// Returns how many times a request is attempted on 429/500 responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn with_api_version(&self, api_version: ApiVersion) -> Self {
        Self {
            api_version,
            ..self.clone()
        }
    }
}

// Verify MondayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MondayConfig>();
};

/// Builder for constructing [`MondayConfig`] instances.
///
/// Only `api_token` is required.
///
/// # Defaults
///
/// - `api_version`: `2024-04`
/// - `endpoint`: `https://api.monday.com/v2`
/// - `file_endpoint`: `https://api.monday.com/v2/file`
/// - `tries`: `1` (no retries)
/// - `timeout`: `None`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use monday_async::{ApiToken, ApiVersion, EndpointUrl, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("my-token").unwrap())
///     .api_version(ApiVersion::V2025_01)
///     .endpoint(EndpointUrl::new("http://localhost:8080/v2").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .header("X-Trace", "on")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MondayConfigBuilder {
    api_token: Option<ApiToken>,
    api_version: Option<ApiVersion>,
    endpoint: Option<EndpointUrl>,
    file_endpoint: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
    extra_headers: HashMap<String, String>,
    tries: Option<u32>,
    timeout: Option<Duration>,
}

impl MondayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the file upload endpoint.
    #[must_use]
    pub fn file_endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.file_endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Headers added here override the defaults, including `API-Version`.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Sets how many times a request is attempted on 429/500 responses.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`MondayConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not
    /// set, or [`ConfigError::InvalidHeader`] if an extra header cannot be
    /// sent over HTTP.
    pub fn build(self) -> Result<MondayConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        for (name, value) in &self.extra_headers {
            if HeaderName::from_bytes(name.as_bytes()).is_err()
                || HeaderValue::from_str(value).is_err()
            {
                return Err(ConfigError::InvalidHeader { name: name.clone() });
            }
        }

        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => EndpointUrl::new(DEFAULT_ENDPOINT)?,
        };
        let file_endpoint = match self.file_endpoint {
            Some(endpoint) => endpoint,
            None => EndpointUrl::new(DEFAULT_FILE_ENDPOINT)?,
        };

        Ok(MondayConfig {
            api_token,
            api_version: self.api_version.unwrap_or_default(),
            endpoint,
            file_endpoint,
            user_agent_prefix: self.user_agent_prefix,
            extra_headers: self.extra_headers,
            tries: self.tries.unwrap_or(1).max(1),
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> ApiToken {
        ApiToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_api_token() {
        let result = MondayConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = MondayConfig::builder().api_token(token()).build().unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2024_04);
        assert_eq!(config.endpoint().as_ref(), DEFAULT_ENDPOINT);
        assert_eq!(config.file_endpoint().as_ref(), DEFAULT_FILE_ENDPOINT);
        assert_eq!(config.tries(), 1);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.extra_headers().is_empty());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let endpoint = EndpointUrl::new("http://localhost:9000/v2").unwrap();
        let file_endpoint = EndpointUrl::new("http://localhost:9000/v2/file").unwrap();

        let config = MondayConfig::builder()
            .api_token(token())
            .api_version(ApiVersion::V2025_01)
            .endpoint(endpoint.clone())
            .file_endpoint(file_endpoint.clone())
            .user_agent_prefix("MyApp/1.0")
            .header("X-Custom", "value")
            .tries(4)
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2025_01);
        assert_eq!(config.endpoint(), &endpoint);
        assert_eq!(config.file_endpoint(), &file_endpoint);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(
            config.extra_headers().get("X-Custom"),
            Some(&"value".to_string())
        );
        assert_eq!(config.tries(), 4);
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_tries_is_clamped_to_one() {
        let config = MondayConfig::builder()
            .api_token(token())
            .tries(0)
            .build()
            .unwrap();
        assert_eq!(config.tries(), 1);
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let result = MondayConfig::builder()
            .api_token(token())
            .header("Bad Header", "value")
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeader { name }) if name == "Bad Header"
        ));

        let result = MondayConfig::builder()
            .api_token(token())
            .header("X-Ok", "line\nbreak")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = MondayConfig::builder()
            .api_token(ApiToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MondayConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MondayConfig>();
    }
}
