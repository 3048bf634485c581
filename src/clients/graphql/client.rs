//! GraphQL client implementation for the monday.com API.
//!
//! This module provides the [`GraphqlClient`] type, the transport every
//! resource forwards its queries to.

use std::path::Path;

use serde_json::{json, Value};

use crate::clients::graphql::{GraphqlError, GraphqlResponse, MondayApiError};
use crate::clients::{FileUpload, HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, MondayConfig};

/// GraphQL client for the monday.com API.
///
/// Owns one [`HttpClient`] for the GraphQL endpoint and one for the file
/// endpoint. Both share the same `reqwest::Client` connection pool.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async
/// tasks behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use monday_async::{ApiToken, MondayConfig};
/// use monday_async::clients::graphql::GraphqlClient;
/// use serde_json::json;
///
/// let config = MondayConfig::builder()
///     .api_token(ApiToken::new("my-token")?)
///     .build()?;
/// let client = GraphqlClient::new(&config, reqwest::Client::new());
///
/// // Simple query
/// let response = client.execute("query { me { id name } }", None).await?;
/// println!("{}", response.data()["me"]["name"]);
///
/// // Query with variables
/// let response = client.execute(
///     "query ($ids: [ID!]) { boards (ids: $ids) { id name } }",
///     Some(json!({"ids": [123]})),
/// ).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    api: HttpClient,
    file: HttpClient,
    api_version: ApiVersion,
    tries: u32,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client using the configured API version.
    ///
    /// # Arguments
    ///
    /// * `config` - Token, version, endpoints and request defaults
    /// * `http` - The `reqwest::Client` to send requests with. It is shared,
    ///   never closed by this client.
    #[must_use]
    pub fn new(config: &MondayConfig, http: reqwest::Client) -> Self {
        Self {
            api: HttpClient::new(config.endpoint(), config, http.clone()),
            file: HttpClient::new(config.file_endpoint(), config, http),
            api_version: config.api_version().clone(),
            tries: config.tries(),
        }
    }

    /// Creates a new GraphQL client with a specific API version override.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use monday_async::ApiVersion;
    /// use monday_async::clients::graphql::GraphqlClient;
    ///
    /// let client = GraphqlClient::with_version(&config, reqwest::Client::new(), ApiVersion::V2025_04);
    /// assert_eq!(client.api_version(), &ApiVersion::V2025_04);
    /// ```
    #[must_use]
    pub fn with_version(config: &MondayConfig, http: reqwest::Client, version: ApiVersion) -> Self {
        let config_version = config.api_version();

        if &version == config_version {
            tracing::debug!(
                "GraphQL client has a redundant API version override to the default {}",
                config_version
            );
        } else {
            tracing::debug!(
                "GraphQL client overriding default API version {} with {}",
                config_version,
                version
            );
        }

        Self::new(&config.with_api_version(version), http)
    }

    /// Returns the API version sent with every request.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns how many times each request is attempted.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.api.endpoint()
    }

    /// Returns the file upload endpoint URL.
    #[must_use]
    pub fn file_endpoint(&self) -> &str {
        self.file.endpoint()
    }

    /// Executes a GraphQL query or mutation.
    ///
    /// The body is `{"query": query}`, with `"variables"` added when given.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Api`] when the body carries `errors`,
    ///   `error_message` or `error_code`, whatever the HTTP status
    /// - [`GraphqlError::Http`] for network failures, other non-2xx
    ///   responses and retry exhaustion
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        self.send_json(&self.api, query, variables).await
    }

    /// Executes a GraphQL document against the file endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn execute_file_query(&self, query: &str) -> Result<GraphqlResponse, GraphqlError> {
        self.send_json(&self.file, query, None).await
    }

    /// Reads a file and sends it with `query` as a multipart request to the
    /// file endpoint.
    ///
    /// `query` must declare a `$file: File!` variable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::FileRead`] when the file cannot be read, and
    /// otherwise the same errors as [`execute`](Self::execute).
    pub async fn upload_file(
        &self,
        query: &str,
        path: impl AsRef<Path>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let path = path.as_ref();
        let content = tokio::fs::read(path)
            .await
            .map_err(|source| GraphqlError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().into_owned());

        self.upload_bytes(query, file_name, content).await
    }

    /// Sends in-memory content with `query` as a multipart request to the
    /// file endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub async fn upload_bytes(
        &self,
        query: &str,
        file_name: impl Into<String>,
        content: Vec<u8>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let request = HttpRequest::builder()
            .multipart(FileUpload {
                query: query.to_string(),
                file_name: file_name.into(),
                content,
            })
            .tries(self.tries)
            .build()
            .map_err(HttpError::from)?;

        let result = self.file.request(request).await;
        Self::handle_result(result, query)
    }

    async fn send_json(
        &self,
        client: &HttpClient,
        query: &str,
        variables: Option<Value>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let body = match variables {
            Some(vars) => json!({ "query": query, "variables": vars }),
            None => json!({ "query": query }),
        };

        let request = HttpRequest::builder()
            .json(body)
            .tries(self.tries)
            .build()
            .map_err(HttpError::from)?;

        let result = client.request(request).await;
        Self::handle_result(result, query)
    }

    fn handle_result(
        result: Result<HttpResponse, HttpError>,
        query: &str,
    ) -> Result<GraphqlResponse, GraphqlError> {
        match result {
            Ok(response) => {
                if let Some(error) =
                    MondayApiError::from_body(&response.body, query, Some(response.code))
                {
                    return Err(Self::api_error(error));
                }
                Ok(GraphqlResponse::from(response))
            }
            Err(HttpError::Response(e)) => {
                match MondayApiError::from_body(&e.body, query, Some(e.code)) {
                    Some(error) => Err(Self::api_error(error)),
                    None => Err(GraphqlError::Http(HttpError::Response(e))),
                }
            }
            Err(e) => Err(GraphqlError::Http(e)),
        }
    }

    fn api_error(error: MondayApiError) -> GraphqlError {
        tracing::warn!(
            kind = ?error.kind,
            status = ?error.status_code,
            "monday.com API returned an error: {}",
            error.message.trim()
        );
        GraphqlError::Api(error)
    }
}
