//! Team queries and mutations.

use crate::clients::graphql::QuerySyntaxError;
use crate::graphql::addons::complexity;
use crate::graphql::helpers::{format_ids, format_param_value, graphql_parse};
use crate::graphql::types::Id;

/// Builds a query listing teams, or the teams with the given IDs.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn get_teams_query(team_ids: &[Id], with_complexity: bool) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let team_ids = format_ids(team_ids);
    graphql_parse(&format!(
        r"
        query {{{complexity}
            teams (ids: {team_ids}) {{
                id
                name
                users {{
                    id
                    email
                    name
                }}
            }}
        }}
        "
    ))
}

/// Builds a mutation adding users to a team.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn add_users_to_team_query(
    team_id: impl Into<Id>,
    user_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    team_membership_mutation("add_users_to_team", &team_id.into(), user_ids, with_complexity)
}

/// Builds a mutation removing users from a team.
///
/// # Errors
///
/// Returns [`QuerySyntaxError`] if the generated document does not parse.
pub fn remove_users_from_team_query(
    team_id: impl Into<Id>,
    user_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    team_membership_mutation(
        "remove_users_from_team",
        &team_id.into(),
        user_ids,
        with_complexity,
    )
}

fn team_membership_mutation(
    field: &str,
    team_id: &Id,
    user_ids: &[Id],
    with_complexity: bool,
) -> Result<String, QuerySyntaxError> {
    let complexity = complexity(with_complexity);
    let team_id = format_param_value(team_id);
    let user_ids = format_ids(user_ids);
    graphql_parse(&format!(
        r"
        mutation {{{complexity}
            {field} (team_id: {team_id}, user_ids: {user_ids}) {{
                successful_users {{
                    name
                    email
                }}
                failed_users {{
                    name
                    email
                }}
            }}
        }}
        "
    ))
}
