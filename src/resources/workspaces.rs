use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{
    add_teams_to_workspace_query, add_users_to_workspace_query, create_workspace_query,
    delete_teams_from_workspace_query, delete_users_from_workspace_query, delete_workspace_query,
    get_workspaces_query, update_workspace_query, WorkspaceListParams,
};
use crate::graphql::types::{Id, SubscriberKind, WorkspaceKind};

/// Workspaces and their members.
#[derive(Clone, Debug)]
pub struct WorkspaceResource {
    client: Arc<GraphqlClient>,
}

impl WorkspaceResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Lists workspaces.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_workspaces(
        &self,
        params: &WorkspaceListParams,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_workspaces_query(params, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Creates a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn create_workspace(
        &self,
        name: &str,
        kind: WorkspaceKind,
        description: Option<&str>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = create_workspace_query(name, kind, description, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Changes the name, kind or description of a workspace. Only the given
    /// fields are sent.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn update_workspace(
        &self,
        workspace_id: impl Into<Id>,
        name: Option<&str>,
        kind: Option<WorkspaceKind>,
        description: Option<&str>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = update_workspace_query(workspace_id, name, kind, description, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deletes a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_workspace(
        &self,
        workspace_id: impl Into<Id>,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_workspace_query(workspace_id, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Adds users to a workspace as subscribers or owners.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn add_users_to_workspace(
        &self,
        workspace_id: impl Into<Id>,
        user_ids: &[Id],
        kind: SubscriberKind,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = add_users_to_workspace_query(workspace_id, user_ids, kind, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Removes users from a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_users_from_workspace(
        &self,
        workspace_id: impl Into<Id>,
        user_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_users_from_workspace_query(workspace_id, user_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Adds teams to a workspace as subscribers or owners.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn add_teams_to_workspace(
        &self,
        workspace_id: impl Into<Id>,
        team_ids: &[Id],
        kind: SubscriberKind,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = add_teams_to_workspace_query(workspace_id, team_ids, kind, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Removes teams from a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn delete_teams_from_workspace(
        &self,
        workspace_id: impl Into<Id>,
        team_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = delete_teams_from_workspace_query(workspace_id, team_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
