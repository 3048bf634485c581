//! Building monday.com GraphQL documents.
//!
//! - [`types`]: IDs and the enums the API accepts
//! - [`params`]: structured filters for item queries
//! - [`helpers`]: rendering Rust values as GraphQL literals
//! - [`addons`]: optional selection fragments
//! - [`queries`]: one builder per API operation

pub mod addons;
pub mod helpers;
pub mod params;
pub mod queries;
pub mod types;

pub use params::{ItemByColumnValuesParam, QueryParams};
pub use types::Id;
