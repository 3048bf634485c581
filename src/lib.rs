//! # monday.com async client
//!
//! An asynchronous Rust client for the monday.com GraphQL API, providing
//! type-safe configuration, query builders for every resource and a
//! retrying HTTP transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MondayConfig`] and [`MondayConfigBuilder`]
//! - Validated newtypes for the API token, endpoints and API version
//! - [`MondayClient`], exposing one facade per resource (users, boards,
//!   items, ...) over a shared connection pool
//! - Query builders in [`graphql::queries`] that produce parsed, normalized
//!   GraphQL documents
//! - Structured API errors with the failing query lines in the message
//! - Multipart file uploads to file columns and updates
//!
//! ## Quick Start
//!
//! ```rust
//! use monday_async::{ApiToken, ApiVersion, MondayConfig};
//!
//! // Create configuration using the builder pattern
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .api_version(ApiVersion::V2024_10)
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version(), &ApiVersion::V2024_10);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use monday_async::{ApiToken, MondayClient, MondayConfig};
//! use monday_async::graphql::queries::BoardListParams;
//!
//! let config = MondayConfig::builder()
//!     .api_token(ApiToken::new(std::env::var("MONDAY_TOKEN")?)?)
//!     .build()?;
//! let client = MondayClient::new(&config)?;
//!
//! let boards = client.boards.get_boards(&BoardListParams::default(), false).await?;
//! for board in boards.data()["boards"].as_array().into_iter().flatten() {
//!     println!("{} {}", board["id"], board["name"]);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every request returns [`GraphqlError`]:
//!
//! ```rust,ignore
//! use monday_async::GraphqlError;
//!
//! match client.items.delete_item(123_u64, false).await {
//!     Ok(response) => println!("deleted {}", response.data()["delete_item"]["id"]),
//!     Err(GraphqlError::Api(e)) if e.kind.is_retryable() => {
//!         println!("try again later: {}", e.message);
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Caller-owned pools**: A supplied `reqwest::Client` is shared, never closed

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod graphql;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::MondayClient;
pub use config::{ApiToken, ApiVersion, EndpointUrl, MondayConfig, MondayConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::graphql::{Complexity, MondayApiError, MondayErrorKind, QuerySyntaxError};
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlResponse, HttpClient, HttpError, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError,
    MaxHttpRetriesExceededError,
};

pub use graphql::Id;
