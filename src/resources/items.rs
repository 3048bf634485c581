//! Items, subitems and their column values.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::params::{ItemByColumnValuesParam, QueryParams};
use crate::graphql::queries::{
    archive_item_query, change_item_column_json_value_query,
    change_item_column_simple_value_query, change_multiple_item_column_values_query,
    clear_item_updates_query, create_item_query, create_subitem_query, delete_item_query,
    duplicate_item_query, get_item_updates_query, get_items_by_board_query,
    get_items_by_column_value_query, get_items_by_group_query, get_items_by_id_query,
    get_items_by_multiple_column_values_query, get_subitems_by_parent_item_query,
    move_item_to_group_query, next_items_page_query, upload_file_to_column_query, ItemFields,
    ItemListParams,
};
use crate::graphql::types::Id;

/// Items and subitems.
///
/// Paginated reads return a `cursor` next to the items. Pass it to
/// [`next_items_page`](Self::next_items_page) until it comes back `null`.
#[derive(Clone, Debug)]
pub struct ItemResource {
    client: Arc<GraphqlClient>,
}

impl ItemResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Fetches items by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_items_by_id(
        &self,
        params: &ItemListParams,
        fields: ItemFields,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_items_by_id_query(params, fields, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Fetches a page of items on boards.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_items_by_board(
        &self,
        board_ids: &[Id],
        query_params: Option<&QueryParams>,
        limit: u32,
        cursor: Option<&str>,
        fields: ItemFields,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_items_by_board_query(
            board_ids,
            query_params,
            limit,
            cursor,
            fields,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Fetches a page of items in a group.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_items_by_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        query_params: Option<&QueryParams>,
        limit: u32,
        cursor: Option<&str>,
        fields: ItemFields,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_items_by_group_query(
            board_id,
            group_id,
            query_params,
            limit,
            cursor,
            fields,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Fetches a page of items whose column holds any of `column_values`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_items_by_column_value(
        &self,
        board_id: impl Into<Id>,
        column_id: &str,
        column_values: &[&str],
        limit: u32,
        cursor: Option<&str>,
        fields: ItemFields,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_items_by_column_value_query(
            board_id,
            column_id,
            column_values,
            limit,
            cursor,
            fields,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Fetches a page of items matching values in several columns.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_items_by_multiple_column_values(
        &self,
        board_id: impl Into<Id>,
        columns: &ItemByColumnValuesParam,
        limit: u32,
        cursor: Option<&str>,
        fields: ItemFields,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_items_by_multiple_column_values_query(
            board_id,
            columns,
            limit,
            cursor,
            fields,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Fetches the page of items after `cursor`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn next_items_page(
        &self,
        cursor: &str,
        limit: u32,
        fields: ItemFields,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = next_items_page_query(cursor, limit, fields, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Creates an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_item(
        &self,
        item_name: &str,
        board_id: impl Into<Id>,
        group_id: Option<&str>,
        column_values: Option<&Value>,
        create_labels_if_missing: bool,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_item_query(
            item_name,
            board_id,
            group_id,
            column_values,
            create_labels_if_missing,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Duplicates an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn duplicate_item(
        &self,
        board_id: impl Into<Id>,
        item_id: impl Into<Id>,
        with_updates: Option<bool>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = duplicate_item_query(board_id, item_id, with_updates, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Archives an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn archive_item(
        &self,
        item_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = archive_item_query(item_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_item(
        &self,
        item_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_item_query(item_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Lists the subitems of an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_subitems_by_parent_item(
        &self,
        parent_item_id: impl Into<Id>,
        with_column_values: bool,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query =
            get_subitems_by_parent_item_query(parent_item_id, with_column_values, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Creates a subitem.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_subitem(
        &self,
        parent_item_id: impl Into<Id>,
        subitem_name: &str,
        column_values: Option<&Value>,
        create_labels_if_missing: bool,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_subitem_query(
            parent_item_id,
            subitem_name,
            column_values,
            create_labels_if_missing,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Changes several column values of an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn change_multiple_item_column_values(
        &self,
        item_id: impl Into<Id>,
        board_id: impl Into<Id>,
        column_values: &Value,
        create_labels_if_missing: bool,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = change_multiple_item_column_values_query(
            item_id,
            board_id,
            column_values,
            create_labels_if_missing,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Sets one column of an item to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn change_item_column_json_value(
        &self,
        item_id: impl Into<Id>,
        column_id: &str,
        board_id: impl Into<Id>,
        value: &Value,
        create_labels_if_missing: bool,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = change_item_column_json_value_query(
            item_id,
            column_id,
            board_id,
            value,
            create_labels_if_missing,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Sets one column of an item to a plain string.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn change_item_column_simple_value(
        &self,
        item_id: impl Into<Id>,
        column_id: &str,
        board_id: impl Into<Id>,
        value: &str,
        create_labels_if_missing: bool,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = change_item_column_simple_value_query(
            item_id,
            column_id,
            board_id,
            value,
            create_labels_if_missing,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Uploads a file into a file column of an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::FileRead`] if the file cannot be read, and
    /// otherwise [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn upload_file_to_column(
        &self,
        item_id: impl Into<Id>,
        column_id: &str,
        path: impl AsRef<Path>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = upload_file_to_column_query(item_id, column_id, with_complexity)?;
        self.client.upload_file(&query, path).await
    }

    /// Lists the updates of an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_item_updates(
        &self,
        item_id: impl Into<Id>,
        ids: &[Id],
        limit: u32,
        page: u32,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_item_updates_query(item_id, ids, limit, page, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Removes every update of an item.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn clear_item_updates(
        &self,
        item_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = clear_item_updates_query(item_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Moves an item to another group.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn move_item_to_group(
        &self,
        item_id: impl Into<Id>,
        group_id: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = move_item_to_group_query(item_id, group_id, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
