//! Workspace queries and mutations.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{
    format_enum_value, format_ids, format_param_value, gather_params, graphql_parse,
};
use crate::graphql::queries::users::paginated_limit;
use crate::graphql::types::{Id, State, SubscriberKind, WorkspaceKind};

/// Parameters for listing workspaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceListParams {
    /// Return only these workspaces. When set, `limit` becomes the number of IDs.
    pub ids: Vec<Id>,
    /// Maximum number of workspaces to return (default: 25).
    pub limit: u32,
    /// Page number, starting at 1.
    pub page: u32,
    /// Return only open or only closed workspaces.
    pub kind: Option<WorkspaceKind>,
    /// State filter (default: active).
    pub state: State,
}

impl Default for WorkspaceListParams {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            limit: 25,
            page: 1,
            kind: None,
            state: State::Active,
        }
    }
}

/// Builds a query listing workspaces.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_workspaces_query(
    params: &WorkspaceListParams,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let limit = paginated_limit(&params.ids, params.limit);
    let ids = format_ids(&params.ids);
    let kind = format_enum_value(params.kind);
    let page = params.page;
    let state = params.state;
    graphql_parse(&format!(
        r"
        query {{{complexity}
            workspaces (
                ids: {ids},
                kind: {kind},
                limit: {limit},
                page: {page},
                state: {state}
            ) {{
                id
                name
                kind
                description
                state
            }}
        }}
        "
    ))
}

/// Builds a mutation creating a workspace.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn create_workspace_query(
    name: &str,
    kind: WorkspaceKind,
    description: Option<&str>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let name = format_param_value(name);
    let description = format_param_value(&description);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            create_workspace (
                name: {name},
                kind: {kind},
                description: {description}
            ) {{
                id
                name
                description
                kind
            }}
        }}
        "
    ))
}

/// Builds a mutation updating a workspace. Only the given fields change.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn update_workspace_query(
    workspace_id: impl Into<Id>,
    name: Option<&str>,
    kind: Option<WorkspaceKind>,
    description: Option<&str>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let workspace_id = format_param_value(&workspace_id.into());
    let attributes = gather_params(&[
        ("name", name.map(format_param_value)),
        ("kind", kind.map(|k| k.to_string())),
        ("description", description.map(format_param_value)),
    ]);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            update_workspace (
                id: {workspace_id},
                attributes: {{{attributes}}}
            ) {{
                id
                name
                description
                kind
            }}
        }}
        "
    ))
}

/// Builds a mutation deleting a workspace.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_workspace_query(
    workspace_id: impl Into<Id>,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let workspace_id = format_param_value(&workspace_id.into());
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_workspace (workspace_id: {workspace_id}) {{
                id
            }}
        }}
        "
    ))
}

/// Builds a mutation adding users to a workspace as subscribers or owners.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn add_users_to_workspace_query(
    workspace_id: impl Into<Id>,
    user_ids: &[Id],
    kind: SubscriberKind,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let workspace_id = format_param_value(&workspace_id.into());
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            add_users_to_workspace (
                workspace_id: {workspace_id},
                user_ids: {user_ids},
                kind: {kind}
            ) {{
                id
                name
                email
            }}
        }}
        "
    ))
}

/// Builds a mutation removing users from a workspace.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_users_from_workspace_query(
    workspace_id: impl Into<Id>,
    user_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let workspace_id = format_param_value(&workspace_id.into());
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_users_from_workspace (
                workspace_id: {workspace_id},
                user_ids: {user_ids}
            ) {{
                id
                name
                email
            }}
        }}
        "
    ))
}

/// Builds a mutation adding teams to a workspace as subscribers or owners.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn add_teams_to_workspace_query(
    workspace_id: impl Into<Id>,
    team_ids: &[Id],
    kind: SubscriberKind,
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let workspace_id = format_param_value(&workspace_id.into());
    let team_ids = format_ids(team_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            add_teams_to_workspace (
                workspace_id: {workspace_id},
                team_ids: {team_ids},
                kind: {kind}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}

/// Builds a mutation removing teams from a workspace.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn delete_teams_from_workspace_query(
    workspace_id: impl Into<Id>,
    team_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let workspace_id = format_param_value(&workspace_id.into());
    let team_ids = format_ids(team_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            delete_teams_from_workspace (
                workspace_id: {workspace_id},
                team_ids: {team_ids}
            ) {{
                id
                name
            }}
        }}
        "
    ))
}
