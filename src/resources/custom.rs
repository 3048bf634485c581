use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::helpers::graphql_parse;

/// Arbitrary GraphQL documents.
///
/// Documents are parsed before they are sent, so syntax errors surface as
/// [`GraphqlError::Syntax`] without a round trip.
///
/// # Example
///
/// ```rust,ignore
/// let response = client
///     .custom
///     .execute_custom_query("query { boards (limit: 1) { id name } }", None)
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct CustomResource {
    client: Arc<GraphqlClient>,
}

impl CustomResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Validates, normalizes and sends a document to the GraphQL endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Syntax`] if `query` is not valid GraphQL, and
    /// otherwise the errors of [`GraphqlClient::execute`].
    pub async fn execute_custom_query(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = graphql_parse(query)?;
        self.client.execute(&query, variables).await
    }

    /// Validates, normalizes and sends a document to the file endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Syntax`] if `query` is not valid GraphQL, and
    /// otherwise the errors of [`GraphqlClient::execute_file_query`].
    pub async fn execute_custom_file_query(
        &self,
        query: &str,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = graphql_parse(query)?;
        self.client.execute_file_query(&query).await
    }

    /// Validates a document declaring `$file: File!` and uploads a file
    /// with it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Syntax`] if `query` is not valid GraphQL, and
    /// otherwise the errors of [`GraphqlClient::upload_file`].
    pub async fn upload_custom_file(
        &self,
        query: &str,
        path: impl AsRef<Path>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = graphql_parse(query)?;
        self.client.upload_file(&query, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::test_support;

    #[tokio::test]
    async fn test_invalid_custom_query_is_rejected_before_sending() {
        let custom = CustomResource::new(test_support::client());
        let result = custom.execute_custom_query("query { boards { id }", None).await;
        assert!(matches!(result, Err(GraphqlError::Syntax(_))));

        let result = custom.execute_custom_file_query("mutation {").await;
        assert!(matches!(result, Err(GraphqlError::Syntax(_))));
    }

    #[test]
    fn test_invalid_upload_query_is_rejected_before_reading_file() {
        let custom = CustomResource::new(test_support::client());
        let result = tokio_test::block_on(
            custom.upload_custom_file("mutation ($file: File!) {", "/missing/file.txt"),
        );
        assert!(matches!(result, Err(GraphqlError::Syntax(_))));
    }
}
