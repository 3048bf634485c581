use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{create_or_get_tag_query, get_tags_by_board_query, get_tags_query};
use crate::graphql::types::Id;

/// Tags.
#[derive(Clone, Debug)]
pub struct TagResource {
    client: Arc<GraphqlClient>,
}

impl TagResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Lists public tags, or the tags with the given IDs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_tags(
        &self,
        ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_tags_query(ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Lists the tags used on a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_tags_by_board(
        &self,
        board_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_tags_by_board_query(board_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Returns the tag with this name, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_or_get_tag(
        &self,
        tag_name: &str,
        board_id: Option<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_or_get_tag_query(tag_name, board_id, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
