use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{
    create_folder_query, delete_folder_query, get_folders_query, update_folder_query,
    FolderListParams,
};
use crate::graphql::types::{FolderColor, Id};

/// Workspace folders.
#[derive(Clone, Debug)]
pub struct FolderResource {
    client: Arc<GraphqlClient>,
}

impl FolderResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Lists folders.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_folders(
        &self,
        params: &FolderListParams,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_folders_query(params, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Creates a folder in a workspace, optionally nested in another folder.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_folder(
        &self,
        workspace_id: impl Into<Id>,
        name: &str,
        color: Option<FolderColor>,
        parent_folder_id: Option<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query =
            create_folder_query(workspace_id, name, color, parent_folder_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Changes the name, color or parent of a folder. Only the given fields
    /// are sent.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn update_folder(
        &self,
        folder_id: impl Into<Id>,
        name: Option<&str>,
        color: Option<FolderColor>,
        parent_folder_id: Option<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = update_folder_query(folder_id, name, color, parent_folder_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deletes a folder and everything in it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_folder(
        &self,
        folder_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_folder_query(folder_id, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
