use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{
    archive_group_query, create_group_query, delete_group_query, duplicate_group_query,
    get_groups_by_board_query, update_group_query,
};
use crate::graphql::types::{GroupAttributes, GroupColors, Id, PositionRelative};

/// Board groups.
#[derive(Clone, Debug)]
pub struct GroupResource {
    client: Arc<GraphqlClient>,
}

impl GroupResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Lists the groups of a board, optionally by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_groups_by_board(
        &self,
        board_id: impl Into<Id>,
        ids: &[&str],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_groups_by_board_query(board_id, ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Creates a group.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_group(
        &self,
        board_id: impl Into<Id>,
        group_name: &str,
        group_color: Option<GroupColors>,
        relative_to: Option<&str>,
        position_relative_method: Option<PositionRelative>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_group_query(
            board_id,
            group_name,
            group_color,
            relative_to,
            position_relative_method,
            with_complexity,
        )?;
        self.client.execute(&query, None).await
    }

    /// Changes one attribute of a group.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn update_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        group_attribute: GroupAttributes,
        new_value: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query =
            update_group_query(board_id, group_id, group_attribute, new_value, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Duplicates a group.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn duplicate_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        add_to_top: Option<bool>,
        group_title: Option<&str>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query =
            duplicate_group_query(board_id, group_id, add_to_top, group_title, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Archives a group.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn archive_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = archive_group_query(board_id, group_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deletes a group and its items.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_group(
        &self,
        board_id: impl Into<Id>,
        group_id: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_group_query(board_id, group_id, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
