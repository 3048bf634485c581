use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{
    add_teams_to_board_query, add_users_to_board_query, archive_board_query, create_board_query,
    delete_board_query, delete_teams_from_board_query, duplicate_board_query,
    get_board_views_query, get_boards_query, remove_users_from_board_query, update_board_query,
    BoardListParams, CreateBoardParams, DuplicateBoardParams,
};
use crate::graphql::types::{BoardAttributes, Id, SubscriberKind};

/// Boards, their subscribers and views.
#[derive(Clone, Debug)]
pub struct BoardResource {
    client: Arc<GraphqlClient>,
}

impl BoardResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Lists boards with their groups and columns.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_boards(
        &self,
        params: &BoardListParams,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_boards_query(params, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Creates a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_board(
        &self,
        params: &CreateBoardParams,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_board_query(params, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Duplicates a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn duplicate_board(
        &self,
        board_id: impl Into<Id>,
        params: &DuplicateBoardParams,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = duplicate_board_query(board_id, params, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Changes one attribute of a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn update_board(
        &self,
        board_id: impl Into<Id>,
        board_attribute: BoardAttributes,
        new_value: &str,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = update_board_query(board_id, board_attribute, new_value, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Archives a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn archive_board(
        &self,
        board_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = archive_board_query(board_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deletes a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_board(
        &self,
        board_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_board_query(board_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Subscribes users to a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn add_users_to_board(
        &self,
        board_id: impl Into<Id>,
        user_ids: &[Id],
        kind: SubscriberKind,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = add_users_to_board_query(board_id, user_ids, kind, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Unsubscribes users from a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn remove_users_from_board(
        &self,
        board_id: impl Into<Id>,
        user_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = remove_users_from_board_query(board_id, user_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Subscribes teams to a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn add_teams_to_board(
        &self,
        board_id: impl Into<Id>,
        team_ids: &[Id],
        kind: SubscriberKind,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = add_teams_to_board_query(board_id, team_ids, kind, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Unsubscribes teams from a board.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_teams_from_board(
        &self,
        board_id: impl Into<Id>,
        team_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_teams_from_board_query(board_id, team_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Lists the views of a board, optionally by ID or type.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_board_views(
        &self,
        board_id: impl Into<Id>,
        ids: &[Id],
        view_type: Option<&str>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_board_views_query(board_id, ids, view_type, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
