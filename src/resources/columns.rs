use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{
    change_column_description_query, change_column_title_query, create_column_query,
    delete_column_query, get_columns_by_board_query, CreateColumnParams,
};
use crate::graphql::types::{ColumnType, Id};

/// Board columns.
#[derive(Clone, Debug)]
pub struct ColumnResource {
    client: Arc<GraphqlClient>,
}

impl ColumnResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Lists the columns of a board, optionally by ID or type.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_columns_by_board(
        &self,
        board_id: impl Into<Id>,
        ids: &[&str],
        types: &[ColumnType],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_columns_by_board_query(board_id, ids, types, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Creates a column.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_column(
        &self,
        board_id: impl Into<Id>,
        params: &CreateColumnParams,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_column_query(board_id, params, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Renames a column.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn change_column_title(
        &self,
        board_id: impl Into<Id>,
        column_id: &str,
        title: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = change_column_title_query(board_id, column_id, title, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Changes the description of a column.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn change_column_description(
        &self,
        board_id: impl Into<Id>,
        column_id: &str,
        description: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query =
            change_column_description_query(board_id, column_id, description, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deletes a column.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_column(
        &self,
        board_id: impl Into<Id>,
        column_id: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_column_query(board_id, column_id, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
