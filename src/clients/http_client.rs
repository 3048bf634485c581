//! HTTP client for monday.com API communication.
//!
//! This module provides the [`HttpClient`] type, which posts requests to a
//! single endpoint with authentication headers and automatic retries.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::{EndpointUrl, MondayConfig};

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "Authorization";

/// Header carrying the API version.
pub const VERSION_HEADER: &str = "API-Version";

/// Builds the `reqwest::Client` used when the caller does not supply one.
///
/// # Errors
///
/// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
pub fn build_http_client() -> Result<reqwest::Client, HttpError> {
    Ok(reqwest::Client::builder().use_rustls_tls().build()?)
}

/// HTTP client bound to one monday.com endpoint.
///
/// The client handles:
/// - Default headers (`Authorization`, `API-Version`, `User-Agent`, `Accept`)
/// - JSON and multipart bodies
/// - Automatic retries for 429 and 500 responses
///
/// The wrapped `reqwest::Client` is a cheap handle onto a shared connection
/// pool. Clients for the API and file endpoints built from the same handle
/// share connections.
///
/// # Example
///
/// ```rust,ignore
/// use monday_async::{ApiToken, MondayConfig};
/// use monday_async::clients::{HttpClient, HttpRequest};
/// use serde_json::json;
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("my-token")?)
///     .build()?;
/// let client = HttpClient::new(config.endpoint(), &config, reqwest::Client::new());
///
/// let request = HttpRequest::builder()
///     .json(json!({"query": "query { me { id } }"}))
///     .build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for `endpoint`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The URL every request is posted to
    /// * `config` - Supplies the token, API version, user agent prefix,
    ///   extra headers and request timeout
    /// * `client` - The `reqwest::Client` to send requests with
    #[must_use]
    pub fn new(endpoint: &EndpointUrl, config: &MondayConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}monday-async v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            TOKEN_HEADER.to_string(),
            config.api_token().as_ref().to_string(),
        );
        default_headers.insert(
            VERSION_HEADER.to_string(),
            config.api_version().to_string(),
        );
        for (key, value) in config.extra_headers() {
            default_headers.insert(key.clone(), value.clone());
        }

        Self {
            client,
            endpoint: endpoint.as_ref().to_string(),
            default_headers,
            timeout: config.timeout(),
        }
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - Retries are exhausted (`MaxRetries`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tracing::debug!(
                "Sending request to {} (attempt {} of {})",
                self.endpoint,
                tries,
                request.tries
            );

            let mut req_builder = self.client.post(&self.endpoint);
            if let Some(timeout) = self.timeout {
                req_builder = req_builder.timeout(timeout);
            }
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            req_builder = match &request.body {
                Some(RequestBody::Json(body)) => req_builder.json(body),
                Some(RequestBody::Multipart(upload)) => req_builder.multipart(upload.to_form()?),
                None => req_builder,
            };

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await?;

            let body = match serde_json::from_str(&body_text) {
                Ok(body) => body,
                Err(source) if (200..300).contains(&code) => {
                    tracing::error!(code, "response body is not valid JSON");
                    return Err(HttpError::InvalidJson {
                        code,
                        body: body_text,
                        source,
                    });
                }
                Err(_) if body_text.is_empty() => serde_json::json!({}),
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            };

            let response = HttpResponse::new(code, res_headers, body);

            if response.is_ok() {
                return Ok(response);
            }

            let error_message = Self::serialize_error(&response);

            let should_retry = code == 429 || code == 500;
            if !should_retry || tries >= request.tries {
                if should_retry && request.tries > 1 {
                    return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                        code,
                        tries: request.tries,
                        message: error_message,
                        error_reference: response.request_id().map(String::from),
                    }));
                }
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message: error_message,
                    error_reference: response.request_id().map(String::from),
                    body: response.body,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                "monday.com API responded with {}, retrying in {:.1}s",
                code,
                delay.as_secs_f64()
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// 429 honors the advertised delay when it is a representable duration;
    /// everything else waits the fixed time.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        if status == 429 {
            if let Some(delay) = response
                .retry_request_after
                .and_then(|seconds| Duration::try_from_secs_f64(seconds).ok())
            {
                return delay;
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error_message", "error_code", "error"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }
        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, ApiVersion};

    fn create_test_config() -> MondayConfig {
        MondayConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    fn create_client(config: &MondayConfig) -> HttpClient {
        HttpClient::new(config.endpoint(), config, reqwest::Client::new())
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = create_test_config();
        let client = create_client(&config);
        assert_eq!(client.endpoint(), "https://api.monday.com/v2");

        let file_client = HttpClient::new(config.file_endpoint(), &config, reqwest::Client::new());
        assert_eq!(file_client.endpoint(), "https://api.monday.com/v2/file");
    }

    #[test]
    fn test_token_is_sent_raw_in_authorization_header() {
        let config = create_test_config();
        let client = create_client(&config);

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"test-token".to_string())
        );
    }

    #[test]
    fn test_api_version_header() {
        let config = MondayConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .api_version(ApiVersion::V2024_10)
            .build()
            .unwrap();
        let client = create_client(&config);

        assert_eq!(
            client.default_headers().get("API-Version"),
            Some(&"2024-10".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let config = create_test_config();
        let client = create_client(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("monday-async v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = MondayConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = create_client(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | monday-async"));
    }

    #[test]
    fn test_extra_headers_override_defaults() {
        let config = MondayConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .header("API-Version", "2023-10")
            .header("X-Team", "ops")
            .build()
            .unwrap();
        let client = create_client(&config);

        assert_eq!(
            client.default_headers().get("API-Version"),
            Some(&"2023-10".to_string())
        );
        assert_eq!(
            client.default_headers().get("X-Team"),
            Some(&"ops".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let config = create_test_config();
        let client = create_client(&config);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_serialize_error_keeps_monday_fields() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        let response = HttpResponse::new(
            401,
            headers,
            serde_json::json!({"error_message": "Not Authenticated", "status_code": 401}),
        );

        let message = HttpClient::serialize_error(&response);
        assert!(message.contains("Not Authenticated"));
        assert!(message.contains("req-1"));
        assert!(!message.contains("status_code"));
    }

    #[test]
    fn test_retry_delay() {
        let response = HttpResponse::new(
            429,
            HashMap::new(),
            serde_json::json!({"retry_in_seconds": 3}),
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            Duration::from_secs(3)
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 500),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_unrepresentable_retry_delay_falls_back_to_fixed_wait() {
        for advertised in ["1e30", "-3", "NaN", "inf"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![advertised.to_string()]);
            let response = HttpResponse::new(429, headers, serde_json::json!({}));
            assert_eq!(
                HttpClient::calculate_retry_delay(&response, 429),
                Duration::from_secs(RETRY_WAIT_TIME),
                "Retry-After: {advertised}"
            );
        }

        let response = HttpResponse::new(
            429,
            HashMap::new(),
            serde_json::json!({"retry_in_seconds": 1e300}),
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }
}
