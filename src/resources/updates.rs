use std::path::Path;
use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{
    add_file_to_update_query, create_update_query, delete_update_query, edit_update_query,
    get_updates_query, like_update_query, pin_update_query, unlike_update_query,
    unpin_update_query,
};
use crate::graphql::types::Id;

/// Updates and replies.
#[derive(Clone, Debug)]
pub struct UpdateResource {
    client: Arc<GraphqlClient>,
}

impl UpdateResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Lists updates, or the updates with the given IDs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_updates(
        &self,
        ids: &[Id],
        limit: u32,
        page: u32,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_updates_query(ids, limit, page, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Posts an update on an item, or a reply when `parent_id` is set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_update(
        &self,
        body: &str,
        item_id: impl Into<Id>,
        parent_id: Option<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_update_query(body, item_id, parent_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Replaces the body of an update.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn edit_update(
        &self,
        update_id: impl Into<Id>,
        body: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = edit_update_query(update_id, body, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Pins an update to the top of its item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn pin_update(
        &self,
        update_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = pin_update_query(update_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Unpins an update.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn unpin_update(
        &self,
        update_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = unpin_update_query(update_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Likes an update.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn like_update(
        &self,
        update_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = like_update_query(update_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Removes a like from an update.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn unlike_update(
        &self,
        update_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = unlike_update_query(update_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deletes an update.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_update(
        &self,
        update_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_update_query(update_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Attaches a file to an update.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::FileRead`] if the file cannot be read, and
    /// otherwise [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn add_file_to_update(
        &self,
        update_id: impl Into<Id>,
        path: impl AsRef<Path>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = add_file_to_update_query(update_id, with_complexity)?;
        self.client.upload_file(&query, path).await
    }
}
