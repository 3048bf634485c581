//! HTTP request types.
//!
//! Every monday.com call is a `POST` to one of two endpoints, so a request is
//! described by its body, extra headers and retry count.

use std::collections::HashMap;

use crate::clients::errors::InvalidHttpRequestError;

/// Multipart field map binding part `0` to the `$file` variable.
pub const FILE_VARIABLE_MAP: &str = r#"{"0": ["variables.file"]}"#;

/// A file attached to a GraphQL mutation through a multipart request.
///
/// The form carries three parts: `query`, `map` (see [`FILE_VARIABLE_MAP`])
/// and `0` with the file content sent as `application/octet-stream`.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// The GraphQL mutation referencing `$file`.
    pub query: String,
    /// The file name reported to the API.
    pub file_name: String,
    /// The file content.
    pub content: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("query", &self.query)
            .field("file_name", &self.file_name)
            .field("content_len", &self.content.len())
            .finish()
    }
}

impl FileUpload {
    /// Builds the multipart form for this upload.
    ///
    /// A fresh form is built for every attempt since forms are consumed
    /// when sent.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] if the octet-stream MIME type is rejected.
    pub fn to_form(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let file_part = reqwest::multipart::Part::bytes(self.content.clone())
            .file_name(self.file_name.clone())
            .mime_str("application/octet-stream")?;

        Ok(reqwest::multipart::Form::new()
            .text("query", self.query.clone())
            .text("map", FILE_VARIABLE_MAP)
            .part("0", file_part))
    }
}

/// The body of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON body such as `{"query": "...", "variables": {...}}`.
    Json(serde_json::Value),
    /// A multipart file upload.
    Multipart(FileUpload),
}

impl RequestBody {
    /// Returns the GraphQL document carried by this body, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value.get("query").and_then(serde_json::Value::as_str),
            Self::Multipart(upload) => Some(&upload.query),
        }
    }
}

/// A request to be sent to the API.
///
/// # Example
///
/// ```rust
/// use monday_async::clients::{HttpRequest, RequestBody};
/// use serde_json::json;
///
/// let request = HttpRequest::builder()
///     .json(json!({"query": "query { me { id } }"}))
///     .tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.tries, 3);
/// assert!(matches!(request.body, Some(RequestBody::Json(_))));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The request body.
    pub body: Option<RequestBody>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::new()
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `None`
    /// - the body carries an empty GraphQL document
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        let body = self
            .body
            .as_ref()
            .ok_or(InvalidHttpRequestError::MissingBody)?;

        if body.query().map_or(true, |q| q.trim().is_empty()) {
            return Err(InvalidHttpRequestError::EmptyQuery);
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    body: Option<RequestBody>,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    fn new() -> Self {
        Self {
            body: None,
            extra_headers: None,
            tries: 1,
        }
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a multipart file upload body.
    #[must_use]
    pub fn multipart(mut self, upload: FileUpload) -> Self {
        self.body = Some(RequestBody::Multipart(upload));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the number of times to attempt the request.
    ///
    /// Default is 1 (no retries). Higher values enable automatic retries for
    /// 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            body: self.body,
            extra_headers: self.extra_headers,
            tries: self.tries.max(1),
        };
        request.verify()?;
        Ok(request)
    }
}
