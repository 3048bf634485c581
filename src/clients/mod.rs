//! HTTP client types for monday.com API communication.
//!
//! This module provides the transport layer: request/response types, the
//! retrying [`HttpClient`] and the GraphQL client built on it.
//!
//! # Overview
//!
//! - [`HttpClient`]: async client bound to one endpoint
//! - [`HttpRequest`]: a request with a JSON or multipart body
//! - [`HttpResponse`]: a parsed response
//! - [`FileUpload`]: a file attached to a mutation
//! - [`graphql::GraphqlClient`]: the GraphQL client used by every resource
//! - [`graphql::GraphqlError`]: GraphQL-specific error types
//!
//! # Retry Behavior
//!
//! - **429 (Rate Limited)**: retries after `Retry-After` (or the body's
//!   `retry_in_seconds`), or 1 second if neither is present
//! - **500 (Server Error)**: retries with a fixed 1-second delay
//! - **Other errors**: returned immediately
//!
//! The default `tries` is 1, meaning no automatic retries. Configure it with
//! [`MondayConfigBuilder::tries`](crate::MondayConfigBuilder::tries).

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{build_http_client, HttpClient, SDK_VERSION};
pub use http_request::{FileUpload, HttpRequest, HttpRequestBuilder, RequestBody, FILE_VARIABLE_MAP};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlResponse};
