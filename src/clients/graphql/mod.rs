//! GraphQL transport for the monday.com API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that sends GraphQL documents
//! and turns error bodies into typed errors.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: executes queries, file-endpoint queries and uploads
//! - [`GraphqlResponse`]: a successful response with `data` accessors
//! - [`Complexity`]: the parsed `complexity` block
//! - [`GraphqlError`]: error type for GraphQL operations
//! - [`MondayApiError`] and [`MondayErrorKind`]: errors reported by monday.com
//! - [`QuerySyntaxError`]: a document that is not valid GraphQL
//!
//! # Errors in 200 responses
//!
//! monday.com frequently answers with HTTP 200 and an `errors` array, or
//! with top-level `error_message`/`error_code` fields. Such responses are
//! never returned as [`GraphqlResponse`]; they become
//! [`GraphqlError::Api`].
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_async::clients::graphql::{GraphqlClient, GraphqlError};
//!
//! match client.execute("query { boards (ids: 1) { id } }", None).await {
//!     Ok(response) => println!("{}", response.data()),
//!     Err(GraphqlError::Api(e)) => println!("monday.com said: {}", e.message),
//!     Err(e) => println!("transport error: {e}"),
//! }
//! ```

mod client;
mod errors;
mod response;

pub use client::GraphqlClient;
pub use errors::{GraphqlError, MondayApiError, MondayErrorKind, QuerySyntaxError};
pub use response::{Complexity, GraphqlResponse};
