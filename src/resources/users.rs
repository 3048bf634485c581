//! Users and teams.

use std::sync::Arc;

use crate::clients::{GraphqlClient, GraphqlError, GraphqlResponse};
use crate::graphql::queries::{
    activate_users_mutation, add_users_to_team_query, deactivate_users_mutation, get_me_query,
    get_teams_query, get_users_by_email_query, get_users_query, invite_users_mutation,
    remove_users_from_team_query, update_users_email_domain_mutation, update_users_role_mutation,
    UserListParams,
};
use crate::graphql::types::{BaseRoleName, Id, Product, UserKind};

/// Users, teams and user administration.
#[derive(Clone, Debug)]
pub struct UsersResource {
    client: Arc<GraphqlClient>,
}

impl UsersResource {
    pub(crate) const fn new(client: Arc<GraphqlClient>) -> Self {
        Self { client }
    }

    /// Fetches the user the token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_me(&self, with_complexity: bool) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_me_query(with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Lists users, or the users with the given IDs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_users(
        &self,
        params: &UserListParams,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_users_query(params, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Looks users up by email.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_users_by_email(
        &self,
        emails: &[&str],
        kind: UserKind,
        newest_first: bool,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_users_by_email_query(emails, kind, newest_first, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Lists teams, or the teams with the given IDs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn get_teams(
        &self,
        team_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = get_teams_query(team_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Adds users to a team.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn add_users_to_team(
        &self,
        team_id: impl Into<Id>,
        user_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = add_users_to_team_query(team_id, user_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Removes users from a team.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn remove_users_from_team(
        &self,
        team_id: impl Into<Id>,
        user_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = remove_users_from_team_query(team_id, user_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Changes the role of users. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn update_users_role(
        &self,
        user_ids: &[Id],
        new_role: BaseRoleName,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = update_users_role_mutation(user_ids, new_role, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Deactivates users. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn deactivate_users(
        &self,
        user_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = deactivate_users_mutation(user_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Reactivates users. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn activate_users(
        &self,
        user_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = activate_users_mutation(user_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Moves users to another email domain. Requires an admin token.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn update_users_email_domain(
        &self,
        new_domain: &str,
        user_ids: &[Id],
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = update_users_email_domain_mutation(new_domain, user_ids, with_complexity)?;
        self.client.execute(&query, None).await
    }

    /// Invites users by email to a product with the given role.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the request fails or the API reports an
    /// error.
    pub async fn invite_users(
        &self,
        emails: &[&str],
        product: Product,
        user_role: BaseRoleName,
        with_complexity: bool,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let query = invite_users_mutation(emails, product, user_role, with_complexity)?;
        self.client.execute(&query, None).await
    }
}
