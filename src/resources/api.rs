use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{get_all_api_versions_query, get_current_api_version_query};

/// API version information.
#[derive(Clone, Debug)]
pub struct ApiResource {
    client: Arc<GraphqlClient>,
}

impl ApiResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Fetches the API version that served the request.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_current_api_version(
        &self,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_current_api_version_query(with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Fetches every API version with its kind and display name.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_all_api_versions(
        &self,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_all_api_versions_query(with_complexity)?;
        self.client.execute(&query, None).await
    }
}
