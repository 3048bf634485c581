//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: non-2xx responses from the API
//! - [`MaxHttpRetriesExceededError`]: retry attempts exhausted
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError::InvalidJson`]: a 2xx response whose body is not JSON
//! - [`HttpError`]: unified error type for the HTTP layer
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_async::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MaxRetries(e)) => println!("gave up after {} tries", e.tries),
//!     Err(HttpError::InvalidRequest(e)) => println!("invalid request: {e}"),
//!     Err(HttpError::InvalidJson { code, body, .. }) => println!("{code}: {body}"),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-2xx status.
///
/// `message` holds a compact JSON object with whichever of `errors`,
/// `error_message`, `error_code` and `error_reference` the response carried.
/// The full parsed body is kept in `body`.
///
/// # Example
///
/// ```rust
/// use monday_async::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"error_message":"Not Authenticated"}"#.to_string(),
///     error_reference: None,
///     body: json!({"error_message": "Not Authenticated"}),
/// };
///
/// assert_eq!(error.to_string(), r#"{"error_message":"Not Authenticated"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Request ID for error reports (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

/// Error returned when a request keeps failing with 429 or 500 after all
/// configured attempts.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last response.
    pub message: String,
    /// Request ID for error reports (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request has no body.
    #[error("Cannot send a request without a body.")]
    MissingBody,

    /// The GraphQL document is empty or whitespace.
    #[error("Cannot send an empty GraphQL query.")]
    EmptyQuery,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response whose body is not valid JSON.
    #[error("Response with status {code} is not valid JSON: {source}")]
    InvalidJson {
        /// HTTP status code.
        code: u16,
        /// The raw body text.
        body: String,
        /// The parse failure.
        source: serde_json::Error,
    },

    /// Network or connection error, including failures reading the body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidJson { code, .. } => Some(*code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"error_message":"Not Found"}"#.to_string(),
            error_reference: None,
            body: json!({}),
        };
        assert_eq!(error.to_string(), r#"{"error_message":"Not Found"}"#);
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"error_message":"Rate limited"}"#.to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains('3'));
        assert!(message.contains("Exceeded maximum retry count"));
        assert!(message.contains("Rate limited"));
    }

    #[test]
    fn test_invalid_request_error_messages() {
        assert_eq!(
            InvalidHttpRequestError::MissingBody.to_string(),
            "Cannot send a request without a body."
        );
        assert_eq!(
            InvalidHttpRequestError::EmptyQuery.to_string(),
            "Cannot send an empty GraphQL query."
        );
    }

    #[test]
    fn test_status_code_accessor() {
        let error = HttpError::Response(HttpResponseError {
            code: 403,
            message: String::new(),
            error_reference: None,
            body: json!({}),
        });
        assert_eq!(error.status_code(), Some(403));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::EmptyQuery);
        assert_eq!(error.status_code(), None);

        let error = HttpError::InvalidJson {
            code: 200,
            body: "<html>gateway</html>".to_string(),
            source: serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
        };
        assert_eq!(error.status_code(), Some(200));
        assert!(error.to_string().starts_with("Response with status 200 is not valid JSON"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody;
        let _: &dyn std::error::Error = &MaxHttpRetriesExceededError {
            code: 500,
            tries: 2,
            message: String::new(),
            error_reference: None,
        };
    }
}
