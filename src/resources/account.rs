use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::get_account_query;

/// The account the token belongs to.
#[derive(Clone, Debug)]
pub struct AccountResource {
    client: Arc<GraphqlClient>,
}

impl AccountResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Fetches the account, its plan and active products.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_account(&self, with_complexity: bool) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_account_query(with_complexity)?;
        self.client.execute(&query, None).await
    }
}
