use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::get_complexity_query;

/// The complexity budget of the token.
#[derive(Clone, Debug)]
pub struct ComplexityResource {
    client: Arc<GraphqlClient>,
}

impl ComplexityResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Fetches the remaining complexity budget and when it resets.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_complexity(&self) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_complexity_query()?;
        self.client.execute(&query, None).await
    }
}
